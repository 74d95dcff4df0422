use std::io;

use anyhow::Result;

use spellcaster::application::resolve_targets;
use spellcaster::infrastructure::LocalFs;
use spellcaster::presentation::output::render_targets;

use super::Session;

pub fn cmd_targets(session: &Session, requested: &[String]) -> Result<()> {
    let options = session.run_options();
    let specs = session.target_specs(requested)?;
    let resolved = resolve_targets(&LocalFs, &specs, &options)?;
    render_targets(
        &mut io::stdout().lock(),
        &resolved,
        |root| root.is_dir(),
        session.format,
    )?;
    Ok(())
}
