use std::iter::Sum;
use std::ops::Add;

/// Per-worker render counters, reduced once all workers finish.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Camera rays traced.
    pub primary_rays: u64,
    /// Nearest-hit queries against the scene, shadow rays included.
    pub scene_queries: u64,
    pub shadow_rays: u64,
    /// Successful material scatters.
    pub scatters: u64,
}

impl Add for RenderStats {
    type Output = Self;

    fn add(self, other: Self) -> Self::Output {
        Self {
            primary_rays: self.primary_rays + other.primary_rays,
            scene_queries: self.scene_queries + other.scene_queries,
            shadow_rays: self.shadow_rays + other.shadow_rays,
            scatters: self.scatters + other.scatters,
        }
    }
}

impl Sum for RenderStats {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn worker_counters_sum_field_by_field() {
        let worker = |n: u64| RenderStats {
            primary_rays: n,
            scene_queries: 3 * n,
            shadow_rays: 2 * n,
            scatters: n + 1,
        };
        let total: RenderStats = [worker(1), worker(2), worker(4)].into_iter().sum();
        assert_eq!(
            total,
            RenderStats {
                primary_rays: 7,
                scene_queries: 21,
                shadow_rays: 14,
                scatters: 10,
            }
        );
        assert_eq!(std::iter::empty::<RenderStats>().sum::<RenderStats>(), RenderStats::default());
    }
}
