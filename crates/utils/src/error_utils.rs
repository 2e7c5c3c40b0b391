// Copyright 2024-2025 Irreducible Inc.

//! Early-return macros for argument validation.
//!
//! With the `bail_panic` feature enabled, a failed check panics at the point of failure instead
//! of returning, which gives a backtrace into the offending call site when debugging.

#[cfg(feature = "bail_panic")]
#[macro_export]
macro_rules! bail {
	($err:expr) => {
		panic!("{}", $err);
	};
}

#[cfg(not(feature = "bail_panic"))]
#[macro_export]
macro_rules! bail {
	($err:expr) => {
		return Err($err.into());
	};
}

#[macro_export]
macro_rules! ensure {
	($cond:expr, $err:expr) => {
		if !$cond {
			$crate::bail!($err);
		}
	};
}
