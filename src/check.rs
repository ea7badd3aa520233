use crate::error::Error;

/// Verify a response against the expected status and the field names that must
/// appear in its body. Status is checked first; markers are plain substring
/// matches on the raw body text.
pub fn check_response(
    status: u16,
    body: &str,
    expected_status: u16,
    markers: &[&'static str],
) -> Result<(), Error> {
    if status != expected_status {
        return Err(Error::UnexpectedStatus {
            expected: expected_status,
            actual: status,
        });
    }

    if let Some(missing) = markers.iter().find(|marker| !body.contains(**marker)) {
        return Err(Error::MissingMarker(*missing));
    }

    Ok(())
}
