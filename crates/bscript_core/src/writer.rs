use crate::options::Endian;

/// Filler written after a command record that ends on a 2-byte boundary.
pub const COMMAND_PADDING: u16 = 0xEEEE;
/// Filler byte used inside the string table.
pub const STRING_FILLER: u8 = 0xEE;

pub struct ScriptWriter {
    out: Vec<u8>,
    endian: Endian,
}

impl ScriptWriter {
    pub fn with_capacity(capacity: usize, endian: Endian) -> Self {
        Self {
            out: Vec::with_capacity(capacity),
            endian,
        }
    }

    pub fn position(&self) -> usize {
        self.out.len()
    }

    pub fn write_u8(&mut self, value: u8) {
        self.out.push(value);
    }

    pub fn write_u16(&mut self, value: u16) {
        match self.endian {
            Endian::Little => self.out.extend_from_slice(&value.to_le_bytes()),
            Endian::Big => self.out.extend_from_slice(&value.to_be_bytes()),
        }
    }

    pub fn write_u32(&mut self, value: u32) {
        match self.endian {
            Endian::Little => self.out.extend_from_slice(&value.to_le_bytes()),
            Endian::Big => self.out.extend_from_slice(&value.to_be_bytes()),
        }
    }

    pub fn write_f32(&mut self, value: f32) {
        self.write_u32(value.to_bits());
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.out.extend_from_slice(bytes);
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_follow_configured_byte_order() {
        let mut le = ScriptWriter::with_capacity(8, Endian::Little);
        le.write_u32(0x2008_0306);
        le.write_u16(0x0010);
        assert_eq!(le.into_inner(), vec![0x06, 0x03, 0x08, 0x20, 0x10, 0x00]);

        let mut be = ScriptWriter::with_capacity(8, Endian::Big);
        be.write_u32(0x2008_0306);
        be.write_f32(1.0);
        assert_eq!(be.into_inner(), vec![0x20, 0x08, 0x03, 0x06, 0x3F, 0x80, 0x00, 0x00]);
    }
}
