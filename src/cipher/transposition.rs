//! Columnar transposition cipher.
//!
//! Only the *length* of the key matters: it is the number of grid columns.
//! The message is padded with spaces to fill the last row, written into the
//! grid row by row, and read back column by column.
//!
//! Decryption reverses the read. It does not assume the ciphertext was
//! padded: when the length is not a multiple of the column count, the last
//! `rows * columns - len` grid cells are treated as shaded (absent), and the
//! grid columns that own them are one cell shorter.

use crate::cipher::TextCipher;
use crate::config::PAD_CHAR;
use crate::error::{Error, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transposition {
    columns: usize,
}

impl Transposition {
    /// Builds the cipher from a keyword; its character count sets the column count.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidKey`] if the key is empty.
    pub fn new(key: &str) -> Result<Self> {
        Self::with_columns(key.chars().count())
    }

    /// Builds the cipher from an explicit column count.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidKey`] if `columns` is zero.
    pub fn with_columns(columns: usize) -> Result<Self> {
        if columns == 0 {
            return Err(Error::InvalidKey("key cannot be empty".into()));
        }
        Ok(Self { columns })
    }

    #[inline]
    pub const fn columns(&self) -> usize {
        self.columns
    }
}

impl TextCipher for Transposition {
    fn encrypt(&self, message: &str) -> String {
        let mut grid: Vec<char> = message.chars().collect();
        grid.resize(grid.len().next_multiple_of(self.columns), PAD_CHAR);

        (0..self.columns).flat_map(|column| grid.iter().skip(column).step_by(self.columns)).collect()
    }

    fn decrypt(&self, message: &str) -> String {
        let len = message.chars().count();

        // Reading the ciphertext back, each grid row becomes a bucket and each
        // grid column a pass over the buckets.
        let buckets = len.div_ceil(self.columns);
        let passes = self.columns;
        let shaded = buckets * passes - len;

        let mut rows = vec![String::with_capacity(passes); buckets];
        let (mut bucket, mut pass) = (0, 0);

        for symbol in message.chars() {
            rows[bucket].push(symbol);
            bucket += 1;

            // Columns past `passes - shaded` skip the shaded cell in the last row.
            if bucket == buckets || (bucket == buckets - 1 && pass >= passes - shaded) {
                bucket = 0;
                pass += 1;
            }
        }

        rows.concat()
    }
}
