use anyhow::{Context, Result, bail};
use clap::Args;
use kstruct::Cursor;
use tracing::warn;

use crate::schema_spec::RecordSpec;

#[derive(Args)]
pub struct DecodeArgs {
    /// Encoded record as hex (whitespace ignored)
    input: String,

    /// Record layout, e.g. "id:uint32,name:string,ids:array<int32>"
    #[arg(short, long)]
    schema: RecordSpec,

    /// Record type name used in the output
    #[arg(long, default_value = "Record")]
    type_name: String,

    /// Fail if bytes remain after the record
    #[arg(long)]
    strict: bool,
}

impl DecodeArgs {
    pub fn run(self) -> Result<()> {
        let record_type = self.schema.struct_type(&self.type_name)?;
        let compact: String = self.input.split_whitespace().collect();
        let bytes = hex::decode(&compact).context("input is not valid hex")?;

        let mut cursor = Cursor::from(bytes);
        let record = record_type.decode_struct(&mut cursor)?;
        if self.strict && !cursor.is_empty() {
            bail!(
                "{} trailing bytes after record at offset {}",
                cursor.remaining(),
                cursor.position()
            );
        }

        println!("{record}");
        if !cursor.is_empty() {
            warn!(trailing = cursor.remaining(), "trailing bytes ignored");
        }
        Ok(())
    }
}
