use std::io;

use anyhow::Result;

use spellcaster::application::scan_sources;
use spellcaster::infrastructure::LocalFs;
use spellcaster::presentation::output::render_scan;

use super::Session;

pub fn cmd_scan(session: &Session) -> Result<()> {
    let options = session.run_options();
    let report = scan_sources(&LocalFs, &options)?;
    render_scan(&mut io::stdout().lock(), &report, session.format, session.verbose)?;
    Ok(())
}
