// Copyright 2024-2025 Irreducible Inc.

use std::str::FromStr;

/// Read boolean flag from the environment variable.
pub fn boolean_env_flag_set(flag: &str) -> bool {
	match std::env::var(flag) {
		Ok(val) => ["1", "on", "ON", "true", "TRUE", "yes", "YES"].contains(&val.as_str()),
		Err(_) => false,
	}
}

/// Read and parse a value from the environment variable.
///
/// Returns `None` if the variable is unset or fails to parse. A value that fails to parse is
/// reported with a warning rather than silently ignored.
pub fn parsed_env_var<T: FromStr>(name: &str) -> Option<T> {
	let val = std::env::var(name).ok()?;
	match val.trim().parse() {
		Ok(parsed) => Some(parsed),
		Err(_) => {
			tracing::warn!(name, value = %val, "ignoring unparseable environment variable");
			None
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_boolean_env_flag() {
		std::env::set_var("HEAVY_COMPUTE_TEST_FLAG_ON", "yes");
		std::env::set_var("HEAVY_COMPUTE_TEST_FLAG_OFF", "nope");

		assert!(boolean_env_flag_set("HEAVY_COMPUTE_TEST_FLAG_ON"));
		assert!(!boolean_env_flag_set("HEAVY_COMPUTE_TEST_FLAG_OFF"));
		assert!(!boolean_env_flag_set("HEAVY_COMPUTE_TEST_FLAG_UNSET"));
	}

	#[test]
	fn test_parsed_env_var() {
		std::env::set_var("HEAVY_COMPUTE_TEST_NUMBER", " 16 ");
		std::env::set_var("HEAVY_COMPUTE_TEST_GARBAGE", "sixteen");

		assert_eq!(parsed_env_var::<usize>("HEAVY_COMPUTE_TEST_NUMBER"), Some(16));
		assert_eq!(parsed_env_var::<usize>("HEAVY_COMPUTE_TEST_GARBAGE"), None);
		assert_eq!(parsed_env_var::<usize>("HEAVY_COMPUTE_TEST_NUMBER_UNSET"), None);
	}
}
