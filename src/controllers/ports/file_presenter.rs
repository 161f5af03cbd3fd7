use std::io::Write;

/// Serializes accumulated output into a byte sink.
pub trait FilePresenterPort<T: ?Sized> {
    fn present(&self, data: &T, out: &mut dyn Write) -> std::io::Result<()>;
}
