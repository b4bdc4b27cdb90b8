//! Message batching

use crate::domain::Message;

/// Split `messages` into consecutive batches of at most `batch_size`
///
/// Yields `ceil(len / batch_size)` slices whose concatenation is the input.
/// A `batch_size` of zero is treated as one.
pub fn partition_batches(messages: &[Message], batch_size: usize) -> Vec<&[Message]> {
    messages.chunks(batch_size.max(1)).collect()
}
