use clap::Args;
use eyre::Result;
use objcgen_objc::Generator;

use super::UnitArgs;

#[derive(Args)]
pub struct ImplCommand {
    #[command(flatten)]
    unit: UnitArgs,
}

impl ImplCommand {
    pub fn run(&self) -> Result<()> {
        let (unit, options) = self.unit.load()?;
        print!("{}", Generator::new(&unit, options).implementation());
        Ok(())
    }
}
