//! Content slot allocation.
//!
//! Pure functions mapping an ordered selection of content items into the
//! capacity-bounded display categories, plus the recommendation mode used
//! to pre-select candidates balanced across topical lines.

use std::collections::{BTreeMap, HashMap};

use crate::domain::foundation::ContentItemId;
use serde::{Deserialize, Serialize};

use super::{AllocationError, CategoryLimits, ContentItem, SlotCategory};

/// Result of a successful allocation: category to ordered item list.
///
/// Items keep the relative order of the caller's selection within each
/// category, and no list exceeds its configured limit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CategorizedContent {
    categories: BTreeMap<SlotCategory, Vec<ContentItem>>,
}

impl CategorizedContent {
    fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, category: SlotCategory, item: ContentItem) {
        self.categories.entry(category).or_default().push(item);
    }

    /// Returns the items placed in a category, in selection order.
    pub fn items_in(&self, category: SlotCategory) -> &[ContentItem] {
        self.categories
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Returns the number of items placed in a category.
    pub fn count_in(&self, category: SlotCategory) -> usize {
        self.items_in(category).len()
    }

    /// Returns the total number of placed items.
    pub fn total_count(&self) -> usize {
        self.categories.values().map(Vec::len).sum()
    }

    /// Returns true if no item has been placed.
    pub fn is_empty(&self) -> bool {
        self.total_count() == 0
    }

    /// Iterates over non-empty categories in display order.
    pub fn iter(&self) -> impl Iterator<Item = (SlotCategory, &[ContentItem])> {
        self.categories
            .iter()
            .map(|(category, items)| (*category, items.as_slice()))
    }
}

/// Allocates selected items into display categories.
///
/// The caller's `selection_order` is authoritative over any storage order.
/// Each item goes to its affinity category while capacity remains; a full
/// category cascades to alternatives (highlight to normal then grid, normal
/// to grid then highlight, grid to normal then highlight). Nothing is ever
/// dropped silently.
///
/// # Errors
///
/// - `UnknownItem` if the order names an item not in `items`
/// - `ContentNotEligible` if any selected item is unpublished
/// - `CapacityExceeded` once every category is full, naming all items
///   left without a slot
pub fn allocate(
    items: &[ContentItem],
    selection_order: &[ContentItemId],
    limits: &CategoryLimits,
) -> Result<CategorizedContent, AllocationError> {
    let mut by_id: HashMap<ContentItemId, ContentItem> =
        items.iter().map(|item| (*item.id(), item.clone())).collect();

    let mut ordered = Vec::with_capacity(selection_order.len());
    for id in selection_order {
        let item = by_id
            .remove(id)
            .ok_or(AllocationError::UnknownItem { id: *id })?;
        ordered.push(item);
    }

    if let Some(item) = ordered.iter().find(|item| !item.is_eligible()) {
        return Err(AllocationError::ContentNotEligible { id: *item.id() });
    }

    let mut categorized = CategorizedContent::new();
    for (index, item) in ordered.iter().enumerate() {
        match place(&categorized, item.affinity(), limits) {
            Some(category) => categorized.push(category, item.clone()),
            None => {
                // Every category is full, so this and all later items fail.
                return Err(AllocationError::CapacityExceeded {
                    rejected: ordered[index..].iter().map(|i| *i.id()).collect(),
                    capacity: limits.total(),
                });
            }
        }
    }

    Ok(categorized)
}

fn place(
    current: &CategorizedContent,
    preferred: SlotCategory,
    limits: &CategoryLimits,
) -> Option<SlotCategory> {
    if current.count_in(preferred) < limits.limit_for(preferred) {
        return Some(preferred);
    }
    preferred
        .fallback_order()
        .into_iter()
        .find(|category| current.count_in(*category) < limits.limit_for(*category))
}

/// Options for recommendation mode.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecommendOptions {
    /// Only consider items carrying a hero image.
    pub require_image: bool,
    /// Order candidates by publication recency before balancing.
    pub sort_by_recency: bool,
}

/// Recommends up to `target` candidates, balanced across topical lines.
///
/// Candidates are grouped by topical line (untagged items form their own
/// group) in first-seen order. Each line contributes `target / lines`
/// items; the first `target % lines` lines contribute one extra. The
/// concatenation is truncated to `target`.
pub fn recommend(
    pool: &[ContentItem],
    target: usize,
    options: &RecommendOptions,
) -> Vec<ContentItem> {
    if target == 0 {
        return Vec::new();
    }

    let mut candidates: Vec<ContentItem> = pool
        .iter()
        .filter(|item| !options.require_image || item.has_hero_image())
        .cloned()
        .collect();

    if options.sort_by_recency {
        candidates.sort_by(|a, b| b.published_at().cmp(a.published_at()));
    }

    let mut lines: Vec<(Option<String>, Vec<ContentItem>)> = Vec::new();
    for item in candidates {
        let key = item.topical_line().map(str::to_owned);
        match lines.iter_mut().find(|(line, _)| *line == key) {
            Some((_, bucket)) => bucket.push(item),
            None => lines.push((key, vec![item])),
        }
    }

    if lines.is_empty() {
        return Vec::new();
    }

    let per_line = target / lines.len();
    let extra = target % lines.len();

    let mut recommended = Vec::with_capacity(target);
    for (index, (_, bucket)) in lines.into_iter().enumerate() {
        let take = per_line + usize::from(index < extra);
        recommended.extend(bucket.into_iter().take(take));
    }

    recommended.truncate(target);
    recommended
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Timestamp;
    use proptest::prelude::*;

    fn item(affinity: SlotCategory) -> ContentItem {
        tagged_item(affinity, None, true, false)
    }

    fn tagged_item(
        affinity: SlotCategory,
        line: Option<&str>,
        published: bool,
        has_image: bool,
    ) -> ContentItem {
        ContentItem::new(
            ContentItemId::new(),
            "Story".to_string(),
            affinity,
            line.map(str::to_owned),
            published,
            has_image,
            Timestamp::now(),
        )
        .unwrap()
    }

    fn order_of(items: &[ContentItem]) -> Vec<ContentItemId> {
        items.iter().map(|i| *i.id()).collect()
    }

    // Placement

    #[test]
    fn items_land_in_their_affinity_category() {
        let items = vec![
            item(SlotCategory::Highlight),
            item(SlotCategory::Normal),
            item(SlotCategory::Grid),
        ];
        let categorized =
            allocate(&items, &order_of(&items), &CategoryLimits::default()).unwrap();

        assert_eq!(categorized.count_in(SlotCategory::Highlight), 1);
        assert_eq!(categorized.count_in(SlotCategory::Normal), 1);
        assert_eq!(categorized.count_in(SlotCategory::Grid), 1);
    }

    #[test]
    fn full_highlight_overflows_to_normal_first() {
        let items: Vec<_> = (0..4).map(|_| item(SlotCategory::Highlight)).collect();
        let categorized =
            allocate(&items, &order_of(&items), &CategoryLimits::default()).unwrap();

        assert_eq!(categorized.count_in(SlotCategory::Highlight), 3);
        assert_eq!(categorized.count_in(SlotCategory::Normal), 1);
        assert_eq!(categorized.count_in(SlotCategory::Grid), 0);
    }

    #[test]
    fn full_normal_overflows_to_grid_first() {
        let items: Vec<_> = (0..10).map(|_| item(SlotCategory::Normal)).collect();
        let categorized =
            allocate(&items, &order_of(&items), &CategoryLimits::default()).unwrap();

        assert_eq!(categorized.count_in(SlotCategory::Normal), 9);
        assert_eq!(categorized.count_in(SlotCategory::Grid), 1);
        assert_eq!(categorized.count_in(SlotCategory::Highlight), 0);
    }

    #[test]
    fn full_grid_overflows_to_normal_first() {
        let items: Vec<_> = (0..10).map(|_| item(SlotCategory::Grid)).collect();
        let categorized =
            allocate(&items, &order_of(&items), &CategoryLimits::default()).unwrap();

        assert_eq!(categorized.count_in(SlotCategory::Grid), 9);
        assert_eq!(categorized.count_in(SlotCategory::Normal), 1);
    }

    #[test]
    fn selection_order_is_authoritative() {
        let first = item(SlotCategory::Normal);
        let second = item(SlotCategory::Normal);
        let items = vec![first.clone(), second.clone()];

        // Reverse of the storage order.
        let selection = vec![*second.id(), *first.id()];
        let categorized = allocate(&items, &selection, &CategoryLimits::default()).unwrap();

        let placed = categorized.items_in(SlotCategory::Normal);
        assert_eq!(placed[0].id(), second.id());
        assert_eq!(placed[1].id(), first.id());
    }

    // Failures

    #[test]
    fn unpublished_item_rejects_whole_selection() {
        let good = item(SlotCategory::Normal);
        let bad = tagged_item(SlotCategory::Normal, None, false, false);
        let items = vec![good, bad.clone()];

        let result = allocate(&items, &order_of(&items), &CategoryLimits::default());
        assert_eq!(
            result,
            Err(AllocationError::ContentNotEligible { id: *bad.id() })
        );
    }

    #[test]
    fn unknown_id_in_selection_fails() {
        let items = vec![item(SlotCategory::Normal)];
        let ghost = ContentItemId::new();

        let result = allocate(&items, &[ghost], &CategoryLimits::default());
        assert_eq!(result, Err(AllocationError::UnknownItem { id: ghost }));
    }

    // 25 selected items: 3 highlight-affinity, 10 normal-affinity, 12
    // grid-affinity against a total capacity of 21. The first 21 fill
    // highlight=3, normal=9, grid=9 (one normal item overflowing into
    // grid); the last 4 are rejected.
    #[test]
    fn capacity_scenario_rejects_overflow_items() {
        let mut items = Vec::new();
        items.extend((0..3).map(|_| item(SlotCategory::Highlight)));
        items.extend((0..10).map(|_| item(SlotCategory::Normal)));
        items.extend((0..12).map(|_| item(SlotCategory::Grid)));

        let result = allocate(&items, &order_of(&items), &CategoryLimits::default());
        match result {
            Err(AllocationError::CapacityExceeded { rejected, capacity }) => {
                assert_eq!(rejected.len(), 4);
                assert_eq!(capacity, 21);
                let expected: Vec<_> = items[21..].iter().map(|i| *i.id()).collect();
                assert_eq!(rejected, expected);
            }
            other => panic!("expected CapacityExceeded, got {:?}", other),
        }

        // The 21 items that do fit land exactly on the limits, with the
        // tenth normal-affinity item cascading into grid.
        let fitting = &items[..21];
        let categorized =
            allocate(fitting, &order_of(fitting), &CategoryLimits::default()).unwrap();
        assert_eq!(categorized.count_in(SlotCategory::Highlight), 3);
        assert_eq!(categorized.count_in(SlotCategory::Normal), 9);
        assert_eq!(categorized.count_in(SlotCategory::Grid), 9);
        assert_eq!(
            categorized.items_in(SlotCategory::Grid)[0].affinity(),
            SlotCategory::Normal
        );
    }

    // Recommendation mode

    #[test]
    fn recommend_balances_across_topical_lines() {
        let mut pool = Vec::new();
        for _ in 0..5 {
            pool.push(tagged_item(SlotCategory::Normal, Some("politics"), true, true));
        }
        for _ in 0..5 {
            pool.push(tagged_item(SlotCategory::Normal, Some("culture"), true, true));
        }

        let picked = recommend(&pool, 6, &RecommendOptions::default());
        assert_eq!(picked.len(), 6);
        let politics = picked
            .iter()
            .filter(|i| i.topical_line() == Some("politics"))
            .count();
        assert_eq!(politics, 3);
    }

    #[test]
    fn recommend_gives_extras_to_first_lines() {
        let mut pool = Vec::new();
        for line in ["a", "b", "c"] {
            for _ in 0..5 {
                pool.push(tagged_item(SlotCategory::Normal, Some(line), true, false));
            }
        }

        // 7 across 3 lines: 3 + 2 + 2 in first-seen line order.
        let picked = recommend(&pool, 7, &RecommendOptions::default());
        assert_eq!(picked.len(), 7);
        let count = |line: &str| {
            picked
                .iter()
                .filter(|i| i.topical_line() == Some(line))
                .count()
        };
        assert_eq!(count("a"), 3);
        assert_eq!(count("b"), 2);
        assert_eq!(count("c"), 2);
    }

    #[test]
    fn recommend_filters_to_image_bearing_items() {
        let pool = vec![
            tagged_item(SlotCategory::Normal, None, true, true),
            tagged_item(SlotCategory::Normal, None, true, false),
        ];

        let options = RecommendOptions {
            require_image: true,
            sort_by_recency: false,
        };
        let picked = recommend(&pool, 2, &options);
        assert_eq!(picked.len(), 1);
        assert!(picked[0].has_hero_image());
    }

    #[test]
    fn recommend_sorts_by_recency_when_asked() {
        let old = ContentItem::new(
            ContentItemId::new(),
            "Old".to_string(),
            SlotCategory::Normal,
            None,
            true,
            false,
            Timestamp::now().minus_hours(48),
        )
        .unwrap();
        let fresh = ContentItem::new(
            ContentItemId::new(),
            "Fresh".to_string(),
            SlotCategory::Normal,
            None,
            true,
            false,
            Timestamp::now(),
        )
        .unwrap();

        let options = RecommendOptions {
            require_image: false,
            sort_by_recency: true,
        };
        let picked = recommend(&[old.clone(), fresh.clone()], 1, &options);
        assert_eq!(picked[0].id(), fresh.id());
    }

    #[test]
    fn recommend_handles_empty_pool_and_zero_target() {
        assert!(recommend(&[], 5, &RecommendOptions::default()).is_empty());
        let pool = vec![item(SlotCategory::Normal)];
        assert!(recommend(&pool, 0, &RecommendOptions::default()).is_empty());
    }

    // Properties

    fn arbitrary_affinity() -> impl Strategy<Value = SlotCategory> {
        prop_oneof![
            Just(SlotCategory::Highlight),
            Just(SlotCategory::Normal),
            Just(SlotCategory::Grid),
        ]
    }

    proptest! {
        #[test]
        fn allocation_never_drops_an_item(affinities in prop::collection::vec(arbitrary_affinity(), 0..=21)) {
            let items: Vec<_> = affinities.iter().map(|a| item(*a)).collect();
            let categorized =
                allocate(&items, &order_of(&items), &CategoryLimits::default()).unwrap();
            prop_assert_eq!(categorized.total_count(), items.len());

            for selected in &items {
                let appearances = SlotCategory::ALL
                    .iter()
                    .map(|c| {
                        categorized
                            .items_in(*c)
                            .iter()
                            .filter(|i| i.id() == selected.id())
                            .count()
                    })
                    .sum::<usize>();
                prop_assert_eq!(appearances, 1);
            }
        }

        #[test]
        fn allocation_respects_capacity(affinities in prop::collection::vec(arbitrary_affinity(), 0..=40)) {
            let items: Vec<_> = affinities.iter().map(|a| item(*a)).collect();
            let limits = CategoryLimits::default();
            if let Ok(categorized) = allocate(&items, &order_of(&items), &limits) {
                for category in SlotCategory::ALL {
                    prop_assert!(categorized.count_in(category) <= limits.limit_for(category));
                }
            }
        }

        #[test]
        fn allocation_is_selection_order_stable(affinities in prop::collection::vec(arbitrary_affinity(), 0..=21)) {
            let items: Vec<_> = affinities.iter().map(|a| item(*a)).collect();
            let order = order_of(&items);
            let categorized = allocate(&items, &order, &CategoryLimits::default()).unwrap();

            let position = |id: &ContentItemId| order.iter().position(|o| o == id).unwrap();
            for category in SlotCategory::ALL {
                let placed = categorized.items_in(category);
                for pair in placed.windows(2) {
                    prop_assert!(position(pair[0].id()) < position(pair[1].id()));
                }
            }
        }
    }
}
