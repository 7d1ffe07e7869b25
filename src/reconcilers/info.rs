// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Bulk reads backing the `_info` commands.

use super::diff::prune_nulls;
use super::filter::from_map;
use super::pagination::list_all_paginated;
use super::types::{InfoQuery, InfoResult};
use crate::client::{ListParams, ResourceApi};
use crate::errors::ReconcileError;
use tracing::{debug, info};

/// Read one resource by id, or every resource matching the query's filters.
///
/// `id`, `filters` and `filter_query` are mutually exclusive, as are `id`,
/// `tag_filters` and `tag_filter_query`. A read by id that hits a 404 yields
/// an empty result. In check mode no call is made and the result is empty.
///
/// # Errors
///
/// Returns [`ReconcileError::MutuallyExclusive`] for conflicting selectors,
/// [`ReconcileError::UnquotableFilterValue`] for a filter value containing `'`,
/// or the propagated API error.
pub async fn gather<A>(
    api: &A,
    query: &InfoQuery,
    page_size: u32,
    check_mode: bool,
) -> Result<InfoResult, ReconcileError>
where
    A: ResourceApi + ?Sized,
{
    check_exclusive(&[
        ("id", query.id.is_some()),
        ("filters", query.filters.is_some()),
        ("filter_query", query.filter_query.is_some()),
    ])?;
    check_exclusive(&[
        ("id", query.id.is_some()),
        ("tag_filters", query.tag_filters.is_some()),
        ("tag_filter_query", query.tag_filter_query.is_some()),
    ])?;

    if check_mode {
        debug!("Check mode: skipping bulk read");
        return Ok(InfoResult::default());
    }

    if let Some(id) = &query.id {
        return match api.read(id, query.inherit).await {
            Ok(object) => Ok(InfoResult {
                objects: vec![prune_nulls(object)],
            }),
            Err(e) if e.is_not_found() => {
                info!(id = %id, "Resource not found");
                Ok(InfoResult::default())
            }
            Err(e) => Err(e.into()),
        };
    }

    let filter = match &query.filters {
        Some(filters) => from_map(filters)?,
        None => query.filter_query.clone(),
    };
    let tag_filter = match &query.tag_filters {
        Some(filters) => from_map(filters)?,
        None => query.tag_filter_query.clone(),
    };
    let list_params = ListParams {
        filter,
        tag_filter,
        inherit: query.inherit,
        ..Default::default()
    };

    let objects = list_all_paginated(api, list_params, page_size).await?;
    info!(count = objects.len(), "Gathered resources");

    Ok(InfoResult {
        objects: objects.into_iter().map(prune_nulls).collect(),
    })
}

fn check_exclusive(selectors: &[(&'static str, bool)]) -> Result<(), ReconcileError> {
    let given: Vec<&'static str> = selectors
        .iter()
        .filter(|(_, present)| *present)
        .map(|(name, _)| *name)
        .collect();
    if given.len() > 1 {
        return Err(ReconcileError::MutuallyExclusive { fields: given });
    }
    Ok(())
}

#[cfg(test)]
#[path = "info_tests.rs"]
mod info_tests;
