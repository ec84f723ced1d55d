//! Interactive entry point: ask for the two paths, run the converter, and
//! exit with its status.

use anyhow::Result;

use webpbatch::launcher;

fn main() -> Result<()> {
    let code = launcher::run()?;
    std::process::exit(code);
}
