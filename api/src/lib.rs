pub mod newsletter;

// string validation
//
// addresses are checked in the browser before anything is sent to the newsletter provider; this
// is deliberately loose, the provider does the real verification with a confirmation mail
pub const EMAIL_REGEX: &str = r"^[^@\s]{1,64}@[^@\s]+\.[^@\s.]{2,}$";
