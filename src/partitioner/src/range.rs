// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Range partitioner with sampled bounds.

use std::cmp::Ordering;

use common::{row::Row, Dataset, Error, Result};
use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::debug;

use crate::{comparator::RowComparator, factory::RANGE, Partitioner};

/// Sample points wanted for each output partition.
const SAMPLE_POINTS_PER_PARTITION: usize = 20;
const MAX_SAMPLE_SIZE: usize = 1_000_000;
/// Every input partition gets this many times its even share of the sample.
const OVERSAMPLE_FACTOR: f64 = 3.0;
const SAMPLE_SEED: u64 = 0x5eed_0f_b0_0d5;
/// Seed for partitions sampled at the global fraction.
const RESAMPLE_SEED: u64 = 0x0b5e_55ed_da7a;

/// Range partitioner, rows are routed by where they fall among the sorted
/// `bounds`.
///
/// Partition `i` holds rows in `(bounds[i-1], bounds[i]]`, so reading the
/// partitions in index order yields rows in ascending order once each
/// partition is sorted.
///
/// The number of partitions is `bounds.len() + 1`, which can be less than
/// the number asked for when the sample has too few distinct keys.
#[derive(Debug, Clone)]
pub struct RangePartitioner {
    bounds: Vec<Row>,
    comparator: RowComparator,
}

impl RangePartitioner {
    /// Estimate bounds for `num_partitions` partitions from a sample of
    /// `existing`.
    pub fn try_new(num_partitions: usize, existing: &Dataset) -> Result<Self> {
        if num_partitions == 0 {
            return Err(Error::invalid_config(
                "range partitioner requires at least one partition",
            ));
        }

        let comparator = RowComparator;
        if num_partitions == 1 || existing.is_empty() {
            return Ok(Self {
                bounds: Vec::new(),
                comparator,
            });
        }

        let sample_size = (SAMPLE_POINTS_PER_PARTITION * num_partitions).min(MAX_SAMPLE_SIZE);
        let sample_size_per_partition = (OVERSAMPLE_FACTOR * sample_size as f64
            / existing.num_partitions() as f64)
            .ceil() as usize;
        let candidates = sample_candidates(existing, sample_size, sample_size_per_partition);
        debug!(
            num_partitions,
            sample_size_per_partition,
            num_candidates = candidates.len(),
            "RangePartitioner sampled candidates"
        );

        let bounds = determine_bounds(candidates, num_partitions, &comparator)?;
        debug!(num_bounds = bounds.len(), "RangePartitioner determined bounds");

        Ok(Self { bounds, comparator })
    }

    /// Build from known bounds, which must be strictly ascending.
    pub fn try_from_bounds(bounds: Vec<Row>) -> Result<Self> {
        let comparator = RowComparator;
        for pair in bounds.windows(2) {
            if comparator.compare(&pair[0], &pair[1])? != Ordering::Less {
                return Err(Error::invalid_config(
                    "range bounds must be strictly ascending",
                ));
            }
        }

        Ok(Self { bounds, comparator })
    }

    pub fn bounds(&self) -> &[Row] {
        &self.bounds
    }
}

impl Partitioner for RangePartitioner {
    fn name(&self) -> &str {
        RANGE
    }

    fn num_partitions(&self) -> usize {
        self.bounds.len() + 1
    }

    /// Number of bounds strictly less than `row`.
    fn partition(&self, row: &Row) -> Result<usize> {
        let (mut lo, mut hi) = (0, self.bounds.len());
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            match self.comparator.compare(row, &self.bounds[mid])? {
                Ordering::Greater => lo = mid + 1,
                Ordering::Less | Ordering::Equal => hi = mid,
            }
        }

        Ok(lo)
    }
}

/// Reservoir sample every partition, weighting each sampled row by the
/// number of rows it stands for.
///
/// A partition holding more than its share of `sample_size` is sampled at the
/// global fraction `sample_size / total_rows` instead, otherwise a few of its
/// rows would carry most of the weight and skew the bounds.
fn sample_candidates(
    dataset: &Dataset,
    sample_size: usize,
    sample_size_per_partition: usize,
) -> Vec<(Row, f64)> {
    let fraction = (sample_size as f64 / dataset.num_rows().max(1) as f64).min(1.0);
    let mut candidates = Vec::new();
    let mut num_imbalanced = 0;
    for (idx, partition) in dataset.partitions().iter().enumerate() {
        if partition.is_empty() {
            continue;
        }

        let expected = fraction * partition.len() as f64;
        let (k, seed) = if expected > sample_size_per_partition as f64 {
            num_imbalanced += 1;
            (expected.ceil() as usize, RESAMPLE_SEED ^ idx as u64)
        } else {
            (sample_size_per_partition, SAMPLE_SEED ^ idx as u64)
        };

        let mut rng = StdRng::seed_from_u64(seed);
        let sample = reservoir_sample(partition, k, &mut rng);
        let weight = partition.len() as f64 / sample.len() as f64;
        candidates.extend(sample.into_iter().map(|row| (row, weight)));
    }

    if num_imbalanced > 0 {
        debug!(
            num_imbalanced,
            fraction,
            "RangePartitioner resampled imbalanced partitions"
        );
    }
    candidates
}

fn reservoir_sample<R: Rng>(rows: &[Row], k: usize, rng: &mut R) -> Vec<Row> {
    if rows.len() <= k {
        return rows.to_vec();
    }

    let mut reservoir = rows[..k].to_vec();
    for (i, row) in rows.iter().enumerate().skip(k) {
        let j = rng.gen_range(0..=i);
        if j < k {
            reservoir[j] = row.clone();
        }
    }
    reservoir
}

/// Pick at most `num_partitions - 1` bounds from weighted candidates so that
/// the accumulated weight between two bounds is roughly even.
fn determine_bounds(
    mut candidates: Vec<(Row, f64)>,
    num_partitions: usize,
    comparator: &RowComparator,
) -> Result<Vec<Row>> {
    comparator.sort_by_row(&mut candidates, |(row, _)| row)?;

    let total_weight: f64 = candidates.iter().map(|(_, weight)| weight).sum();
    let step = total_weight / num_partitions as f64;
    let mut cum_weight = 0.0;
    let mut target = step;
    let mut bounds: Vec<Row> = Vec::with_capacity(num_partitions - 1);
    for (row, weight) in candidates {
        if bounds.len() >= num_partitions - 1 {
            break;
        }

        cum_weight += weight;
        if cum_weight < target {
            continue;
        }
        let is_new_bound = match bounds.last() {
            None => true,
            Some(prev) => comparator.compare(&row, prev)? == Ordering::Greater,
        };
        if is_new_bound {
            bounds.push(row);
            target += step;
        }
    }

    Ok(bounds)
}
