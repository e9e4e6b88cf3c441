/// Report a non-fatal programming error.
///
/// Coding errors indicate misuse of an API rather than bad input data. The
/// offending call answers with an invalid or empty result, so callers must
/// check validity before use.
macro_rules! coding_error {
	($($arg:tt)*) => {
		log::error!(target: "nanousd", "coding error: {}", format_args!($($arg)*))
	};
}

pub(crate) use coding_error;
