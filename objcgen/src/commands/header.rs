use clap::Args;
use eyre::Result;
use objcgen_objc::Generator;

use super::UnitArgs;

#[derive(Args)]
pub struct HeaderCommand {
    #[command(flatten)]
    unit: UnitArgs,
}

impl HeaderCommand {
    pub fn run(&self) -> Result<()> {
        let (unit, options) = self.unit.load()?;
        print!("{}", Generator::new(&unit, options).header());
        Ok(())
    }
}
