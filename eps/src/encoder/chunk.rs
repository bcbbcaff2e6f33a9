use super::crc32::*;

use std::io::{self, Write};

///
/// A chunk in a PNG file: a 4-character type followed by its data
///
pub (super) struct Chunk<'a> {
    pub chunk_type: &'a [u8; 4],
    pub data:       &'a [u8],
}

impl<'a> Chunk<'a> {
    ///
    /// Writes this chunk to a stream: the length, the type, the data and finally the CRC of the type and data
    ///
    pub fn write_to(&self, target: &mut impl Write) -> io::Result<()> {
        let mut crc = Crc32::new();
        crc.update(self.chunk_type);
        crc.update(self.data);

        target.write_all(&(self.data.len() as u32).to_be_bytes())?;
        target.write_all(self.chunk_type)?;
        target.write_all(self.data)?;
        target.write_all(&crc.finish().to_be_bytes())?;

        Ok(())
    }
}
