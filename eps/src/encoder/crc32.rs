/// The reflected CRC-32 polynomial used by PNG (and zlib, ethernet, etc)
const POLYNOMIAL: u32 = 0xEDB8_8320;

/// The CRC of each possible byte value, so the register can be updated a byte at a time
static CRC_TABLE: [u32; 256] = crc_table();

///
/// Generates the CRC table by running the bitwise algorithm over each byte value
///
const fn crc_table() -> [u32; 256] {
    let mut table   = [0u32; 256];
    let mut byte    = 0;

    while byte < 256 {
        let mut crc = byte as u32;
        let mut bit = 0;

        while bit < 8 {
            if crc & 1 != 0 {
                crc = (crc >> 1) ^ POLYNOMIAL;
            } else {
                crc >>= 1;
            }
            bit += 1;
        }

        table[byte] = crc;
        byte += 1;
    }

    table
}

///
/// Incrementally computes a CRC-32 (ISO-HDLC) checksum
///
#[derive(Copy, Clone, Debug)]
pub struct Crc32 {
    register: u32,
}

impl Default for Crc32 {
    fn default() -> Self {
        Crc32 { register: 0xFFFF_FFFF }
    }
}

impl Crc32 {
    ///
    /// Creates a new checksum with no bytes in it
    ///
    pub fn new() -> Crc32 {
        Self::default()
    }

    ///
    /// Adds some bytes to the checksum
    ///
    pub fn update(&mut self, bytes: &[u8]) {
        let mut crc = self.register;

        for byte in bytes.iter() {
            crc = CRC_TABLE[((crc ^ (*byte as u32)) & 0xff) as usize] ^ (crc >> 8);
        }

        self.register = crc;
    }

    ///
    /// The checksum of all of the bytes added so far
    ///
    #[inline]
    pub fn finish(&self) -> u32 {
        !self.register
    }
}

///
/// Computes the CRC-32 of a block of bytes
///
pub fn crc32(bytes: &[u8]) -> u32 {
    let mut crc = Crc32::new();
    crc.update(bytes);
    crc.finish()
}
