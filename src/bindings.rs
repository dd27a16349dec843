//! Textual boundary: JSON in, JSON out, plus the C ABI wrapper.
//!
//! Hosts (Unity, Unreal, Node, the TCP bridge) speak JSON to the engine and
//! own all memory on their side of the fence. The engine never allocates for
//! the wire format beyond the returned `String`; the C wrapper copies into a
//! caller-provided buffer and reports a status code.

use std::ffi::{CStr, CString};
use std::os::raw::{c_char, c_int};

use crate::engine::calculate_shot;
use crate::error::CoachError;
use crate::shot::ShotInput;

/// Status code for a successful FFI call.
pub const STATUS_OK: c_int = 0;

/// Status code when the rendered output contains an interior NUL and cannot
/// be converted to a C string. Kept for ABI parity with the original
/// library; unreachable with the current output schema.
const STATUS_OUTPUT_CONVERSION: c_int = -5;

/// Calculate derived golf shot values from a JSON payload.
///
/// The input must be a JSON object with the launch fields named in
/// [`ShotInput`](crate::shot::ShotInput); unknown keys are ignored, so a
/// previous result can be fed back in unchanged. The output echoes the
/// supplied fields and nests everything derived under `open_golf_coach`.
pub fn calculate_derived_values(json_input: &str) -> Result<String, CoachError> {
    let input: ShotInput = serde_json::from_str(json_input)
        .map_err(|e| CoachError::MalformedPayload(e.to_string()))?;
    let result = calculate_shot(&input)?;
    serde_json::to_string(&result).map_err(|e| CoachError::SerializationFailure(e.to_string()))
}

/// C ABI entry point.
///
/// Writes a NUL-terminated JSON payload into `output_buffer` and returns 0,
/// or a negative status code on failure:
/// -1 null pointer, -2 invalid UTF-8, -3 parse failure, -4 serialization
/// failure, -5 output conversion, -6 buffer too small, -7 missing required
/// field, -8 invalid value.
///
/// # Safety
///
/// Callers must pass a NUL-terminated input string and a writable buffer of
/// at least `buffer_size` bytes; both pointers are checked for null.
#[no_mangle]
pub extern "C" fn calculate_derived_values_ffi(
    json_input: *const c_char,
    output_buffer: *mut c_char,
    buffer_size: usize,
) -> c_int {
    if json_input.is_null() || output_buffer.is_null() {
        return CoachError::NullPointer.status_code();
    }

    let input = unsafe { CStr::from_ptr(json_input) };
    let input = match input.to_str() {
        Ok(text) => text,
        Err(_) => return CoachError::InvalidEncoding.status_code(),
    };

    let rendered = match calculate_derived_values(input) {
        Ok(json) => json,
        Err(e) => return e.status_code(),
    };

    let output = match CString::new(rendered) {
        Ok(c_string) => c_string,
        Err(_) => return STATUS_OUTPUT_CONVERSION,
    };

    let bytes = output.as_bytes_with_nul();
    if bytes.len() > buffer_size {
        return CoachError::BufferTooSmall {
            required: bytes.len(),
            capacity: buffer_size,
        }
        .status_code();
    }

    unsafe {
        std::ptr::copy_nonoverlapping(bytes.as_ptr(), output_buffer as *mut u8, bytes.len());
    }
    STATUS_OK
}

/// Library version as a static NUL-terminated string.
#[no_mangle]
pub extern "C" fn opengolfcoach_version() -> *const c_char {
    concat!(env!("CARGO_PKG_VERSION"), "\0").as_ptr() as *const c_char
}
