//! Result containers produced by the overlap computations.

use crate::models::pair::EmployeePair;
use serde::Serialize;
use std::collections::HashMap;

/// Accumulated overlap (ms) per employee pair.
///
/// Entries keep the order in which their keys were first inserted; the
/// winner selection depends on it when several pairs tie.
#[derive(Debug, Clone, Default)]
pub struct PairDurations {
    entries: Vec<(EmployeePair, i64)>,
    index: HashMap<EmployeePair, usize>,
}

impl PairDurations {
    /// Register `pair` with a zero total unless it is already present.
    pub(crate) fn ensure(&mut self, pair: EmployeePair) {
        if self.index.contains_key(&pair) {
            return;
        }
        self.index.insert(pair.clone(), self.entries.len());
        self.entries.push((pair, 0));
    }

    pub(crate) fn add(&mut self, pair: &EmployeePair, millis: i64) {
        match self.index.get(pair) {
            Some(&i) => {
                let total = &mut self.entries[i].1;
                *total = total.saturating_add(millis);
            }
            None => {
                self.ensure(pair.clone());
                self.add(pair, millis);
            }
        }
    }

    pub fn get(&self, pair: &EmployeePair) -> Option<i64> {
        self.index.get(pair).map(|&i| self.entries[i].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&EmployeePair, i64)> {
        self.entries.iter().map(|(pair, total)| (pair, *total))
    }

    /// Entries sorted ascending by duration. The sort is stable, so tied
    /// entries keep their insertion order.
    pub fn ascending(&self) -> Vec<(&EmployeePair, i64)> {
        let mut sorted: Vec<_> = self.iter().collect();
        sorted.sort_by_key(|(_, total)| *total);
        sorted
    }

    /// Last entry of the ascending order: the highest total, and among equal
    /// totals the one inserted last.
    pub fn top(&self) -> Option<(&EmployeePair, i64)> {
        self.ascending().pop()
    }

    /// Ranking from winner downwards, consistent with [`PairDurations::top`].
    pub fn ranked(&self) -> Vec<(&EmployeePair, i64)> {
        let mut ranked = self.ascending();
        ranked.reverse();
        ranked
    }
}

/// Overlap (ms) per project for one employee pair, in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProjectDurations {
    entries: Vec<(String, i64)>,
}

impl ProjectDurations {
    pub(crate) fn push(&mut self, project_id: &str, millis: i64) {
        self.entries.push((project_id.to_string(), millis));
    }

    pub fn get(&self, project_id: &str) -> Option<i64> {
        self.entries
            .iter()
            .find(|(id, _)| id == project_id)
            .map(|(_, millis)| *millis)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.entries.iter().map(|(id, millis)| (id.as_str(), *millis))
    }

    pub fn total(&self) -> i64 {
        self.entries
            .iter()
            .fold(0i64, |acc, (_, millis)| acc.saturating_add(*millis))
    }
}
