use crate::error::Error;

/// Takes the payload from the first argument after the program name.
pub fn payload_argument(mut args: impl Iterator<Item = String>) -> Result<String, Error> {
    let _program = args.next();

    let payload = args.next().ok_or(Error::MissingArgumentError)?;

    let ignored = args.count();
    if ignored > 0 {
        log::debug!("ignoring {} extra argument(s)", ignored);
    }

    Ok(payload)
}
