use std::fmt::Debug;
use std::ops::Range;

use eyre::Result;

use crate::Error;

/// Linear sequence of ASCII symbols drawn from a fixed alphabet.
///
/// Implementors only describe their alphabet and storage, all indexing, slicing and
/// transformation logic is shared. Positions here are zero-based storage indices.
pub trait Sequence: Clone + PartialEq + Debug + Sized {
    /// Name of the sequence kind, used in error messages.
    const KIND: &'static str;

    /// Stored symbols.
    fn symbols(&self) -> &[u8];

    /// # Safety
    /// The caller must ensure that all symbols remain valid for the alphabet after modification.
    unsafe fn symbols_mut(&mut self) -> &mut Vec<u8>;

    /// # Safety
    /// The caller must ensure that all symbols are valid, normalized members of the alphabet.
    unsafe fn from_symbols_unchecked(symbols: Vec<u8>) -> Self;

    /// Validate a symbol and bring it to the canonical form used for storage.
    fn normalize(symbol: u8) -> Result<u8>;

    /// Complementary symbol of a (normalized) symbol.
    fn complement_symbol(symbol: u8) -> Result<u8>;

    /// Build a sequence from raw symbols, validating each of them.
    fn from_symbols(symbols: impl Into<Vec<u8>>) -> Result<Self> {
        let mut symbols = symbols.into();
        for x in symbols.iter_mut() {
            *x = Self::normalize(*x)?;
        }
        // All symbols were normalized above
        Ok(unsafe { Self::from_symbols_unchecked(symbols) })
    }

    fn len(&self) -> usize {
        self.symbols().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn get(&self, pos: usize) -> Result<u8> {
        self.symbols()
            .get(pos)
            .copied()
            .ok_or_else(|| Error::out_of_bounds(pos, self.len()).into())
    }

    fn set(&mut self, pos: usize, symbol: u8) -> Result<()> {
        let symbol = Self::normalize(symbol)?;
        let len = self.len();
        match unsafe { self.symbols_mut() }.get_mut(pos) {
            Some(x) => {
                *x = symbol;
                Ok(())
            }
            None => Err(Error::out_of_bounds(pos, len).into()),
        }
    }

    /// Copy of the symbols in the given storage range.
    fn slice(&self, range: Range<usize>) -> Result<Self> {
        self.check_range(&range)?;
        Ok(unsafe { Self::from_symbols_unchecked(self.symbols()[range].to_vec()) })
    }

    /// Overwrite `other.len()` symbols starting at `start` with the content of `other`.
    fn splice(&mut self, start: usize, other: &Self) -> Result<()> {
        let range = start..start + other.len();
        self.check_range(&range)?;
        // Symbols of `other` are valid members of the same alphabet
        let symbols = unsafe { self.symbols_mut() };
        symbols[range].copy_from_slice(other.symbols());
        Ok(())
    }

    fn append(&mut self, other: &Self) -> &mut Self {
        let symbols = unsafe { self.symbols_mut() };
        symbols.extend_from_slice(other.symbols());
        self
    }

    fn concat(&self, other: &Self) -> Self {
        let mut result = self.clone();
        result.append(other);
        result
    }

    fn reversed(&self) -> Self {
        let symbols = self.symbols().iter().rev().copied().collect();
        unsafe { Self::from_symbols_unchecked(symbols) }
    }

    fn complemented(&self) -> Result<Self> {
        let symbols = self
            .symbols()
            .iter()
            .map(|x| Self::complement_symbol(*x))
            .collect::<Result<Vec<_>>>()?;
        Ok(unsafe { Self::from_symbols_unchecked(symbols) })
    }

    /// Sequence of the same kind without any symbols.
    fn empty_like(&self) -> Self {
        unsafe { Self::from_symbols_unchecked(Vec::new()) }
    }

    fn check_range(&self, range: &Range<usize>) -> Result<()> {
        if range.start > range.end {
            return Err(Error::out_of_bounds(format!("{range:?}"), self.len()).into());
        }
        if range.end > self.len() {
            return Err(Error::out_of_bounds(range.end, self.len()).into());
        }
        Ok(())
    }
}
