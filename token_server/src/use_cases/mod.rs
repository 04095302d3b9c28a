pub mod issue_token;
pub mod verify_token;

#[cfg(test)]
pub(crate) mod test_support;
