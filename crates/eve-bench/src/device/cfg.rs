//! Tolerance and sizing limits for device geometry (internal).

/// Two arclength samples closer than this are treated as the same key point.
pub(crate) const KEY_POINT_EPS: f64 = 1e-9;

/// Upper bound on rest-shape sampling intervals.
pub(crate) const MAX_REST_SAMPLES: usize = 10_000_000;
