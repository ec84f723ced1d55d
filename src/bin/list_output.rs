//! List files under a folder and write the list to a JSON file.

use anyhow::Result;
use clap::Parser;

use webpbatch::cli::ListArgs;
use webpbatch::listing;
use webpbatch::utils::print_success;

fn main() -> Result<()> {
    let args = ListArgs::parse();

    let entries = listing::list_entries(&args.root, args.options())?;
    listing::write_json_list(&entries, &args.out, args.indent)?;

    print_success(&format!(
        "Wrote {} entries to {}",
        entries.len(),
        args.out.display()
    ));
    Ok(())
}
