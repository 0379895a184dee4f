use crate::{McfError, McfResult};

/// Floating point type used throughout system
pub type Real = f64;

/// Edge cost. May be negative.
pub type Cost = Real;

pub fn ensure_finite(v: Real, what: &'static str) -> McfResult<Real> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(McfError::NonFinite { what, value: v })
    }
}

/// Observation cost of a location: `-ln(b / (1 - b))`.
///
/// `b` is the probability that the location belongs to an object trajectory
/// rather than clutter. Locations with `b > 0.5` get a negative cost.
pub fn observation_cost(b: Real) -> McfResult<Cost> {
    ensure_finite(b, "observation probability")?;
    if b <= 0.0 || b >= 1.0 {
        return Err(McfError::InvalidArg {
            what: "observation probability must lie in (0, 1)",
        });
    }
    Ok(-(b / (1.0 - b)).ln())
}

/// Transition cost between two locations: `-ln(p)`.
///
/// `p` is the probability that the target directly succeeds the source on a
/// single trajectory.
pub fn transition_cost(p: Real) -> McfResult<Cost> {
    ensure_finite(p, "transition probability")?;
    if p <= 0.0 || p > 1.0 {
        return Err(McfError::InvalidArg {
            what: "transition probability must lie in (0, 1]",
        });
    }
    Ok(-p.ln())
}
