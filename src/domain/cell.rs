use bytemuck::{Pod, Zeroable};

/// Cell is the fundamental unit of the continuous automaton.
///
/// The layout is `x, y, state, old_state`, four packed `f32`s, so a slice of
/// cells can be uploaded to a vertex buffer as-is.
#[repr(C)]
#[derive(Clone, Copy, PartialEq, Debug, Default, Pod, Zeroable)]
pub struct Cell {
    /// Horizontal position in normalized device coordinates
    pub x: f32,
    /// Vertical position in normalized device coordinates
    pub y: f32,
    /// Value being computed in the current step
    pub state: f32,
    /// Last committed value, read by the convolution
    pub old_state: f32,
}

impl Cell {
    /// Size of one serialized record in bytes
    pub const BYTES: usize = std::mem::size_of::<Cell>();

    /// Create a dead cell at the center of grid slot `(col, row)`
    pub fn at(col: usize, row: usize, width: usize, height: usize) -> Self {
        Self {
            x: 2.0 * (col as f32 + 0.5) / width as f32 - 1.0,
            y: 1.0 - 2.0 * (row as f32 + 0.5) / height as f32,
            state: 0.0,
            old_state: 0.0,
        }
    }

    /// Set both buffers to the same value
    #[inline]
    pub fn set_both(&mut self, value: f32) {
        self.state = value;
        self.old_state = value;
    }

    /// Make the freshly computed state visible to the next step
    #[inline]
    pub fn commit(&mut self) {
        self.old_state = self.state;
    }

    /// True when either buffer holds a nonzero value
    pub fn is_alive(&self) -> bool {
        self.state != 0.0 || self.old_state != 0.0
    }

    /// Encode as four little-endian f32s
    pub fn to_le_bytes(self) -> [u8; Self::BYTES] {
        let mut out = [0u8; Self::BYTES];
        for (chunk, value) in out
            .chunks_exact_mut(4)
            .zip([self.x, self.y, self.state, self.old_state])
        {
            chunk.copy_from_slice(&value.to_le_bytes());
        }
        out
    }

    /// Decode a record written by [`Cell::to_le_bytes`]
    pub fn from_le_bytes(bytes: &[u8; Self::BYTES]) -> Self {
        let field = |i: usize| {
            f32::from_le_bytes([bytes[i * 4], bytes[i * 4 + 1], bytes[i * 4 + 2], bytes[i * 4 + 3]])
        };
        Self {
            x: field(0),
            y: field(1),
            state: field(2),
            old_state: field(3),
        }
    }
}
