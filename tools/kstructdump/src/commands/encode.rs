use anyhow::{Context, Result};
use clap::Args;
use kstruct::Value;
use tracing::debug;

use crate::schema_spec::RecordSpec;

#[derive(Args)]
pub struct EncodeArgs {
    /// Record layout, e.g. "id:uint32,name:string,ids:array<int32>"
    #[arg(short, long)]
    schema: RecordSpec,

    /// Record type name used in diagnostics
    #[arg(long, default_value = "Record")]
    type_name: String,

    /// Field value as name=value; omitted fields are null. The bare word
    /// null sets a field to null. String values are kept verbatim, and a
    /// quoted "null" sets the literal text
    #[arg(long = "set", value_name = "NAME=VALUE")]
    values: Vec<String>,
}

impl EncodeArgs {
    pub fn run(self) -> Result<()> {
        let record_type = self.schema.struct_type(&self.type_name)?;

        let mut named: Vec<(String, Value)> = Vec::with_capacity(self.values.len());
        for assignment in &self.values {
            let (name, text) = assignment
                .split_once('=')
                .with_context(|| format!("expected NAME=VALUE, got '{assignment}'"))?;
            let value = self
                .schema
                .parse_value(name, text)
                .with_context(|| format!("invalid value for field '{name}'"))?;
            named.push((name.to_string(), value));
        }

        let record = record_type.named(named)?;
        debug!(%record, "built record");
        let wire = record.encode()?;
        println!("{}", hex::encode(wire));
        Ok(())
    }
}
