// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Pagination helpers for DDI API list operations.
//!
//! The DDI API pages with `_offset` / `_limit` and gives no continuation token
//! or total count. A page shorter than the limit is the last one.

use crate::client::{ListParams, RemoteObject, ResourceApi};
use crate::errors::ApiError;
use tracing::debug;

/// List all resources with offset pagination.
///
/// Requests `(offset, limit)` pages and appends them until a page returns
/// strictly fewer than `page_size` items. A result set that is an exact
/// multiple of `page_size` therefore costs one extra, empty request.
///
/// # Arguments
///
/// * `api` - Resource API for the collection
/// * `list_params` - Base list parameters (filter, tag filter, inherit); any
///   offset/limit already set is overwritten
/// * `page_size` - Items per page, must be non-zero
///
/// # Example
///
/// ```no_run
/// use b1ddi::client::{BloxOneClient, ListParams};
/// use b1ddi::config::ClientConfig;
/// use b1ddi::reconcilers::pagination::list_all_paginated;
///
/// # async fn example() -> anyhow::Result<()> {
/// let client = BloxOneClient::new(&ClientConfig::resolve(None, None)?)?;
/// let zones = client.resource("dns/auth_zone");
///
/// let all = list_all_paginated(&zones, ListParams::default(), 1000).await?;
/// println!("Found {} zones", all.len());
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// Returns the first API error; pages already fetched are discarded.
pub async fn list_all_paginated<A>(
    api: &A,
    mut list_params: ListParams,
    page_size: u32,
) -> Result<Vec<RemoteObject>, ApiError>
where
    A: ResourceApi + ?Sized,
{
    let page_size = page_size.max(1);
    list_params.limit = Some(page_size);
    list_params.offset = Some(0);

    let mut all_items = Vec::new();
    let mut page_count = 0;

    loop {
        page_count += 1;
        let page = api.list(&list_params).await?;

        let item_count = page.len();
        all_items.extend(page);

        debug!(
            page = page_count,
            items_in_page = item_count,
            total_items = all_items.len(),
            "Fetched page from DDI API"
        );

        if item_count < page_size as usize {
            break;
        }
        list_params.offset = Some(list_params.offset.unwrap_or(0) + page_size);
    }

    debug!(
        total_pages = page_count,
        total_items = all_items.len(),
        "Completed paginated list operation"
    );

    Ok(all_items)
}

#[cfg(test)]
#[path = "pagination_tests.rs"]
mod pagination_tests;
