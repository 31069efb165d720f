//! `appsrc --org <ORG> --apps <APPS>` – print the deduplicated app list.

use anyhow::{Context, Result};
use appsrc_core::github::PageSource;
use appsrc_core::merge::AppSet;
use appsrc_core::pipeline;
use std::io::{self, Write};

pub fn run_discover<S: PageSource + ?Sized>(
    source: &S,
    org: Option<&str>,
    apps: Option<&str>,
) -> Result<()> {
    let set = pipeline::discover(source, org, apps);
    let stdout = io::stdout();
    write_apps(&mut stdout.lock(), &set)
}

/// Writes the output line, or nothing at all for an empty set.
pub(crate) fn write_apps<W: Write>(out: &mut W, set: &AppSet) -> Result<()> {
    if set.is_empty() {
        return Ok(());
    }
    writeln!(out, "{}", set.render()).context("write app list")?;
    out.flush().context("flush app list")?;
    Ok(())
}
