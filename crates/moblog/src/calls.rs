//! Parameter-list construction.
//!
//! Every call starts with the credential triple `[api_key, login, password]`
//! followed by the procedure's own arguments in the order the service
//! declares them. Optional arguments are left out entirely when unset, which
//! changes the arity of the call.

use serde::Serialize;

use crate::{Param, Payload, Procedure};

/// Number of leading parameters taken by the credential triple.
pub const CREDENTIAL_PARAMS: usize = 3;

// ---------------------------------------------------------------------------
// Credentials
// ---------------------------------------------------------------------------

/// The API key, login and password a client authenticates every call with.
///
/// Stored as given; the service is the one to reject bad values. `Debug`
/// output redacts the API key and password.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    api_key: String,
    login: String,
    password: String,
}

impl Credentials {
    /// Creates the credential triple.
    pub fn new(
        api_key: impl Into<String>,
        login: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            login: login.into(),
            password: password.into(),
        }
    }

    /// Returns the login.
    pub fn login(&self) -> &str {
        &self.login
    }

    /// Starts a parameter list for `procedure` with the credential triple in place.
    pub fn call(&self, procedure: Procedure) -> CallBuilder {
        CallBuilder::new(procedure, self)
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &"<redacted>")
            .field("login", &self.login)
            .field("password", &"<redacted>")
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Built call
// ---------------------------------------------------------------------------

/// A procedure together with its complete, ordered parameter list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Call {
    procedure: Procedure,
    params: Vec<Param>,
}

impl Call {
    /// The procedure to invoke.
    pub fn procedure(&self) -> Procedure {
        self.procedure
    }

    /// The ordered parameter list, credentials first.
    pub fn params(&self) -> &[Param] {
        &self.params
    }

    /// The procedure's own arguments, without the credential triple.
    ///
    /// Empty if the list is shorter than the triple.
    pub fn arguments(&self) -> &[Param] {
        self.params.get(CREDENTIAL_PARAMS..).unwrap_or(&[])
    }

    /// Number of parameters sent on the wire.
    pub fn arity(&self) -> usize {
        self.params.len()
    }

    /// Consumes the call, returning its parameter list.
    pub fn into_params(self) -> Vec<Param> {
        self.params
    }
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

/// Appends procedure arguments after the credential triple.
#[derive(Debug)]
pub struct CallBuilder {
    procedure: Procedure,
    params: Vec<Param>,
}

impl CallBuilder {
    fn new(procedure: Procedure, credentials: &Credentials) -> Self {
        let mut params = Vec::with_capacity(CREDENTIAL_PARAMS + 7);
        params.push(Param::Text(credentials.api_key.clone()));
        params.push(Param::Text(credentials.login.clone()));
        params.push(Param::Text(credentials.password.clone()));
        Self { procedure, params }
    }

    /// Appends a numeric argument.
    pub fn int(mut self, value: i32) -> Self {
        self.params.push(Param::Int(value));
        self
    }

    /// Appends a text argument. Empty text is sent as-is.
    pub fn text(mut self, value: impl Into<String>) -> Self {
        self.params.push(Param::Text(value.into()));
        self
    }

    /// Appends a text argument only when it is present and non-empty.
    pub fn optional_text(mut self, value: Option<&str>) -> Self {
        if let Some(v) = value.filter(|v| !v.is_empty()) {
            self.params.push(Param::Text(v.to_owned()));
        }
        self
    }

    /// Appends an encoded file payload.
    pub fn payload(mut self, payload: Payload) -> Self {
        self.params.push(payload.into_param());
        self
    }

    /// Finishes the parameter list.
    pub fn build(self) -> Call {
        Call {
            procedure: self.procedure,
            params: self.params,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials() -> Credentials {
        Credentials::new("key", "me", "secret")
    }

    #[test]
    fn credentials_lead_every_call() {
        let call = credentials().call(Procedure::EntryDelete).int(1).int(2).build();

        assert_eq!(
            &call.params()[..CREDENTIAL_PARAMS],
            &[Param::from("key"), Param::from("me"), Param::from("secret")]
        );
        assert_eq!(call.arguments(), &[Param::Int(1), Param::Int(2)]);
        assert_eq!(call.arity(), 5);
    }

    #[test]
    fn optional_text_is_omitted_when_unset_or_empty() {
        let base = || credentials().call(Procedure::GetCommunityMoblogs);

        assert_eq!(base().optional_text(None).build().arity(), 3);
        assert_eq!(base().optional_text(Some("")).build().arity(), 3);

        let call = base().optional_text(Some("30")).build();
        assert_eq!(call.arity(), 4);
        assert_eq!(call.params()[3], Param::from("30"));
    }

    #[test]
    fn plain_text_keeps_empty_values() {
        let call = credentials().call(Procedure::MoblogChangeText).int(1).text("").build();
        assert_eq!(call.arguments(), &[Param::Int(1), Param::from("")]);
    }

    #[test]
    fn arguments_of_a_short_list_are_empty() {
        let call = Call {
            procedure: Procedure::EntryDelete,
            params: vec![Param::Int(1)],
        };

        assert_eq!(call.arity(), 1);
        assert!(call.arguments().is_empty());
    }

    #[test]
    fn debug_output_redacts_secrets() {
        let rendered = format!("{:?}", Credentials::new("k-9f3a", "alice", "hunter2"));
        assert!(rendered.contains("alice"));
        assert!(!rendered.contains("hunter2"));
        assert!(!rendered.contains("k-9f3a"));
    }
}
