//! What the dispatcher needs from the HTTP transport.

/// Per-request view of the transport.
///
/// A method-not-allowed failure is reported by returning
/// [`DispatchError::MethodNotAllowed`](crate::dispatch::DispatchError)
/// rather than through this trait.
pub trait RequestContext {
    /// Request path, without the query string.
    fn path(&self) -> &str;

    /// Raw query string, `?` optional, possibly empty.
    fn raw_query(&self) -> &str;

    /// Set a response header, replacing any earlier value of the same name.
    fn set_header(&mut self, name: &str, value: &str);
}
