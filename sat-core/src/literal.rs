use std::fmt;

/// Identifier of a logical variable, numbered `1..=num_vars`.
pub type VarId = usize;

/// A literal: a variable together with a polarity. `sign == true` means the
/// variable appears unnegated.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct Literal {
    var: VarId,
    sign: bool,
}

impl Literal {
    #[inline]
    pub fn new(var: VarId, sign: bool) -> Literal {
        debug_assert!(var != 0, "variable 0 is not addressable");
        Literal { var, sign }
    }

    #[inline]
    pub fn pos(var: VarId) -> Literal {
        Literal { var, sign: true }
    }

    #[inline]
    pub fn neg(var: VarId) -> Literal {
        Literal { var, sign: false }
    }

    #[inline]
    pub fn var(self) -> VarId {
        self.var
    }

    #[inline]
    pub fn sign(self) -> bool {
        self.sign
    }

    /// Builds a literal from a nonzero signed DIMACS-style integer.
    ///
    /// # Panics
    /// Panics if `value == 0`.
    pub fn from_i64(value: i64) -> Literal {
        assert!(value != 0, "literal 0 is not a valid signed literal");
        Literal {
            var: value.unsigned_abs() as VarId,
            sign: value > 0,
        }
    }

    pub fn to_i64(self) -> i64 {
        if self.sign {
            self.var as i64
        } else {
            -(self.var as i64)
        }
    }
}

impl std::ops::Neg for Literal {
    type Output = Literal;
    fn neg(self) -> Literal {
        Literal {
            var: self.var,
            sign: !self.sign,
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_i64())
    }
}
