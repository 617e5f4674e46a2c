//! Keyed diff between two trail lists, so the map only touches markers whose
//! trail actually changed.

use std::collections::HashMap;

use crate::trail::Trail;

/// What to do with the markers when the trail list changes.
///
/// A changed trail shows up in both `remove` and `add`. Duplicate ids are kept
/// together as one group so every record still gets a marker.
#[derive(Debug, Default, PartialEq)]
pub struct MarkerPlan<'a> {
    pub remove: Vec<i64>,
    pub add: Vec<(i64, Vec<&'a Trail>)>,
    pub unchanged: Vec<i64>,
}

fn group_by_id(trails: &[Trail]) -> (Vec<i64>, HashMap<i64, Vec<&Trail>>) {
    let mut order = Vec::new();
    let mut groups: HashMap<i64, Vec<&Trail>> = HashMap::new();
    for trail in trails {
        let group = groups.entry(trail.id).or_default();
        if group.is_empty() {
            order.push(trail.id);
        }
        group.push(trail);
    }
    (order, groups)
}

pub fn plan_markers<'a>(old: &[Trail], new: &'a [Trail]) -> MarkerPlan<'a> {
    let (old_order, old_groups) = group_by_id(old);
    let (new_order, mut new_groups) = group_by_id(new);

    let mut plan = MarkerPlan::default();

    for id in old_order {
        match new_groups.get(&id) {
            Some(group) if *group == old_groups[&id] => plan.unchanged.push(id),
            _ => plan.remove.push(id),
        }
    }

    for id in new_order {
        if plan.unchanged.contains(&id) {
            continue;
        }
        if let Some(group) = new_groups.remove(&id) {
            plan.add.push((id, group));
        }
    }

    plan
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trail(id: i64, score: f64) -> Trail {
        Trail {
            id,
            name: format!("Trail {id}"),
            description: String::new(),
            difficulty: "Easy".into(),
            length_miles: 2.,
            latitude: 40.,
            longitude: -105.,
            threat_score: score,
            active_fires_nearby: 0,
            last_fire_report_distance_km: 0.,
        }
    }

    fn added_ids(plan: &MarkerPlan) -> Vec<i64> {
        plan.add.iter().map(|(id, _)| *id).collect()
    }

    #[test]
    fn first_render_adds_everything() {
        let new = vec![trail(1, 10.), trail(2, 50.), trail(3, 90.)];
        let plan = plan_markers(&[], &new);
        assert_eq!(added_ids(&plan), vec![1, 2, 3]);
        assert!(plan.remove.is_empty());
        assert!(plan.unchanged.is_empty());
    }

    #[test]
    fn same_list_keeps_every_marker() {
        let list = vec![trail(1, 10.), trail(2, 50.)];
        let cloned = list.clone();
        let plan = plan_markers(&list, &cloned);
        assert!(plan.add.is_empty());
        assert!(plan.remove.is_empty());
        assert_eq!(plan.unchanged, vec![1, 2]);
    }

    #[test]
    fn only_changed_trails_are_remounted() {
        let old = vec![trail(1, 10.), trail(2, 50.), trail(3, 90.)];
        let new = vec![trail(1, 10.), trail(2, 75.), trail(4, 5.)];
        let plan = plan_markers(&old, &new);
        assert_eq!(plan.unchanged, vec![1]);
        assert_eq!(plan.remove, vec![2, 3]);
        assert_eq!(added_ids(&plan), vec![2, 4]);
    }

    #[test]
    fn emptied_list_removes_all() {
        let old = vec![trail(1, 10.), trail(2, 50.)];
        let plan = plan_markers(&old, &[]);
        assert_eq!(plan.remove, vec![1, 2]);
        assert!(plan.add.is_empty());
    }

    #[test]
    fn duplicate_ids_still_get_one_marker_each() {
        let new = vec![trail(7, 10.), trail(7, 80.)];
        let plan = plan_markers(&[], &new);
        let markers: usize = plan.add.iter().map(|(_, group)| group.len()).sum();
        assert_eq!(markers, new.len());
    }
}
