use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Result};

use spellcaster::domain::ports::SpellEventSink;
use spellcaster::error::SpellError;
use spellcaster::infrastructure::{ConsoleEventSink, JsonEventSink};
use spellcaster::presentation::{create_spell_use_case, OutputFormat};

use super::Session;

/// Flags of `spellcaster cast`
pub struct CastArgs {
    pub targets: Vec<String>,
    pub dry_run: bool,
    pub stop_on_error: bool,
    pub no_copy: bool,
    pub concurrency: Option<usize>,
    pub batch_size: Option<usize>,
    pub paths: Vec<(String, PathBuf)>,
}

pub fn cmd_cast(session: &Session, args: CastArgs) -> Result<()> {
    let mut options = session.run_options().with_dry_run(args.dry_run);
    if args.stop_on_error {
        options = options.with_stop_on_error(true);
    }
    if args.no_copy {
        options = options.with_copy_from_source(false);
    }
    if let Some(n) = args.concurrency {
        options = options.with_concurrency(n);
    }
    if let Some(n) = args.batch_size {
        options = options.with_batch_size(n);
    }
    for (name, dir) in args.paths {
        options = options.with_custom_output_path(name, dir);
    }

    let specs = session.target_specs(&args.targets)?;
    let use_case = create_spell_use_case(&options.namespace)?;
    let sink: Arc<dyn SpellEventSink> = match session.format {
        OutputFormat::Json => Arc::new(JsonEventSink::stdout()),
        OutputFormat::Text => Arc::new(ConsoleEventSink::stderr(session.verbose > 0)),
    };

    match use_case.execute_with_events(&specs, &options, sink) {
        Ok(result) if result.is_success() => Ok(()),
        Ok(result) => bail!("{} file(s) could not be processed", result.failures.len()),
        Err(SpellError::Aborted { partial, cause }) => bail!(
            "aborted after {} processed file(s): {}",
            partial.processed_files.len(),
            cause
        ),
        Err(e) => Err(e.into()),
    }
}
