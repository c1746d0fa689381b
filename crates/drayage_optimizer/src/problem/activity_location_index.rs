use rstar::{RTree, primitives::GeomWithData};

use crate::problem::{
    job::{ActivityId, Job, JobIdx},
    location::Location,
};

type IndexedActivity = GeomWithData<[f64; 2], ActivityId>;

/// Spatial index over every job activity, used by radial ruin to walk
/// activities outward from an anchor location.
pub struct ActivityLocationIndex {
    tree: RTree<IndexedActivity>,
}

impl ActivityLocationIndex {
    pub fn new(locations: &[Location], jobs: &[Job]) -> ActivityLocationIndex {
        let mut indexed = Vec::with_capacity(jobs.len() * 2);

        for (index, job) in jobs.iter().enumerate() {
            let job_id = JobIdx::new(index);
            for (activity_id, location_id) in job.activity_ids(job_id).zip(job.location_ids()) {
                let location = &locations[location_id];
                indexed.push(IndexedActivity::new(
                    [location.x(), location.y()],
                    activity_id,
                ));
            }
        }

        ActivityLocationIndex {
            tree: RTree::bulk_load(indexed),
        }
    }

    /// Activities ordered by squared distance from `location`, nearest
    /// first. Ordering between equidistant activities is unspecified;
    /// callers needing a stable order must break ties themselves.
    pub fn nearest_iter(
        &self,
        location: &Location,
    ) -> impl Iterator<Item = (ActivityId, f64)> + '_ {
        self.tree
            .nearest_neighbor_iter_with_distance_2(&[location.x(), location.y()])
            .map(|(object, distance_2)| (object.data, distance_2))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::{amount::Amount, location::LocationIdx, service::Service};

    #[test]
    fn test_nearest_iter_orders_by_distance() {
        let locations = vec![
            Location::from_cartesian(0.0, 0.0),
            Location::from_cartesian(5.0, 0.0),
            Location::from_cartesian(1.0, 0.0),
        ];
        let jobs: Vec<Job> = (0..3)
            .map(|i| {
                Job::Service(Service::new(
                    i.to_string(),
                    LocationIdx::new(i),
                    Amount::single(1.0),
                ))
            })
            .collect();

        let index = ActivityLocationIndex::new(&locations, &jobs);
        let order: Vec<JobIdx> = index
            .nearest_iter(&locations[0])
            .map(|(activity_id, _)| activity_id.job_id())
            .collect();

        assert_eq!(order, vec![JobIdx::new(0), JobIdx::new(2), JobIdx::new(1)]);
    }
}
