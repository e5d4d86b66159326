use anyhow::Result;

use crate::ui::print_schema;

pub fn execute() -> Result<()> {
    print_schema();
    Ok(())
}
