/// Longest room description accepted by `add_room`.
pub const MAX_DESCRIPTION_LEN: usize = 512;

/// Upper bound on inventory size.
pub const MAX_ROOMS: usize = 10_000;

/// Widest `[start, end]` window, in days, for occupancy reports. The
/// aggregation walks the window day by day; an unbounded range would let a
/// single request pin a core.
pub const MAX_QUERY_SPAN_DAYS: i64 = 3_650;

/// Longest request line the wire codec will buffer.
pub const MAX_LINE_BYTES: usize = 64 * 1024;
