use anyhow::Result;

fn main() -> Result<()> {
    winfree::start_winfree()
}
