#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! The area picker.
//!
//! Composes the catalog, the proximity query, the attribute filter, and the
//! hierarchical selection into one outward-facing unit. The surrounding
//! application (the job-search query builder) registers a change listener
//! and receives `(selected_ids, selected_records)` synchronously, exactly
//! once per operation that changed the selected set. Filter changes never
//! fire the listener; they only affect what [`AreaPicker::visible`] returns.

use nightmap_area_models::{
    AttributeFilter, CenterPreset, Coordinates, GeolocationDenial, GroupStatus, LocationRecord,
    ProximityQuery, RankedArea, SelectMode,
};
use nightmap_catalog::{Catalog, presets::quick_center_presets};
use nightmap_search::{filter_by_attributes, filter_by_proximity};
use nightmap_selection::SelectionModel;

/// Listener invoked after every selection change with the selected record
/// ids (catalog order) and the resolved records.
pub type ChangeListener = Box<dyn FnMut(&[String], &[&LocationRecord])>;

/// One picker session: filters, selection, and the notification seam.
///
/// Owns its state exclusively; nothing here is shared between instances.
/// All operations are synchronous and run to completion.
pub struct AreaPicker {
    catalog: Catalog,
    presets: Vec<CenterPreset>,
    query: ProximityQuery,
    attributes: AttributeFilter,
    selection: SelectionModel,
    on_change: Option<ChangeListener>,
}

impl AreaPicker {
    /// Creates a picker over the given catalog with an empty selection,
    /// no active filters, and the built-in quick-center presets.
    #[must_use]
    pub fn new(catalog: Catalog, mode: SelectMode) -> Self {
        let mut selection = SelectionModel::new(catalog.groups().to_vec(), mode);
        selection.register_tokens(catalog.records().iter().map(|r| r.name.clone()));

        Self {
            catalog,
            presets: quick_center_presets(),
            query: ProximityQuery::off(),
            attributes: AttributeFilter::default(),
            selection,
            on_change: None,
        }
    }

    /// Replaces the preset table (tests use small synthetic tables).
    #[must_use]
    pub fn with_presets(mut self, presets: Vec<CenterPreset>) -> Self {
        self.presets = presets;
        self
    }

    /// Registers the change listener, replacing any previous one.
    pub fn set_on_change<F>(&mut self, listener: F)
    where
        F: FnMut(&[String], &[&LocationRecord]) + 'static,
    {
        self.on_change = Some(Box::new(listener));
    }

    /// The catalog this picker ranges over.
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The quick-center presets.
    #[must_use]
    pub fn presets(&self) -> &[CenterPreset] {
        &self.presets
    }

    /// The current proximity query.
    #[must_use]
    pub const fn query(&self) -> &ProximityQuery {
        &self.query
    }

    /// The current attribute filter.
    #[must_use]
    pub const fn attributes(&self) -> &AttributeFilter {
        &self.attributes
    }

    /// The underlying selection model.
    #[must_use]
    pub const fn selection(&self) -> &SelectionModel {
        &self.selection
    }

    // ── Filter state (never fires the listener) ─────────────────────

    /// Sets or clears the proximity center.
    ///
    /// `None` means "no proximity filtering": a failed or denied
    /// geolocation request degrades to attribute-only search.
    pub fn set_center(&mut self, center: Option<Coordinates>) {
        self.query.center = center;
    }

    /// Sets the inclusive search radius in kilometers.
    pub fn set_radius_km(&mut self, radius_km: f64) {
        self.query.radius_km = radius_km;
    }

    /// Feeds the outcome of a geolocation request into the proximity query.
    ///
    /// A denial is not an error here: the center is cleared and the search
    /// degrades to attribute-only filtering.
    pub fn set_resolved_center(&mut self, outcome: Result<Coordinates, GeolocationDenial>) {
        match outcome {
            Ok(center) => self.query.center = Some(center),
            Err(denial) => {
                log::warn!("geolocation unavailable ({denial}), clearing proximity center");
                self.query.center = None;
            }
        }
    }

    /// Replaces the attribute filter.
    pub fn set_attributes(&mut self, attributes: AttributeFilter) {
        self.attributes = attributes;
    }

    // ── Composition ─────────────────────────────────────────────────

    /// The currently visible subset: attribute filter first, then the
    /// proximity filter with its distance annotation and ascending sort.
    #[must_use]
    pub fn visible(&self) -> Vec<RankedArea<'_>> {
        let narrowed = filter_by_attributes(self.catalog.records(), &self.attributes);
        filter_by_proximity(narrowed, &self.query)
    }

    /// Derived status for every group, in group order.
    #[must_use]
    pub fn group_statuses(&self) -> Vec<(u32, GroupStatus)> {
        self.selection.statuses()
    }

    /// Selected record ids in catalog order, with their records.
    #[must_use]
    pub fn selected(&self) -> (Vec<String>, Vec<&LocationRecord>) {
        let tokens = self.selection.selected();
        let mut ids = Vec::new();
        let mut records = Vec::new();
        for record in self.catalog.records() {
            if tokens.contains(&record.name) {
                ids.push(record.id.clone());
                records.push(record);
            }
        }
        (ids, records)
    }

    // ── Selection operations (fire the listener when they change it) ─

    /// Toggles an entire group by id. Unknown ids are ignored.
    pub fn toggle_group(&mut self, group_id: u32) {
        let changed = self.selection.toggle_group(group_id);
        self.notify_if(changed);
    }

    /// Toggles a single area token. Unknown tokens are ignored.
    pub fn toggle_area(&mut self, token: &str) {
        let changed = self.selection.toggle_token(token);
        self.notify_if(changed);
    }

    /// Applies a recommended area by group name. Unknown names are ignored.
    pub fn apply_recommended(&mut self, name: &str) {
        let changed = self.selection.apply_recommended(name);
        self.notify_if(changed);
    }

    /// Selects exactly the currently visible areas, replacing the selection.
    pub fn select_all_visible(&mut self) {
        let tokens: Vec<String> = self
            .visible()
            .iter()
            .map(|ranked| ranked.record.name.clone())
            .collect();
        let changed = self.selection.select_exactly(tokens);
        self.notify_if(changed);
    }

    /// Empties the selection.
    pub fn clear_selection(&mut self) {
        let changed = self.selection.clear();
        self.notify_if(changed);
    }

    /// Applies a quick-center preset by name.
    ///
    /// Sets the proximity center to the preset's coordinates and, when a
    /// catalog record's name exactly matches the preset name and is not
    /// already selected, selects that record too. Unknown preset names are
    /// ignored.
    pub fn apply_preset(&mut self, name: &str) {
        let Some(preset) = self.presets.iter().find(|p| p.name == name) else {
            log::debug!("apply_preset: unknown preset {name:?}, ignoring");
            return;
        };
        self.query.center = Some(preset.coordinates);

        let matches_record = self.catalog.record_by_name(name).is_some();
        let already_selected = self.selection.selected().contains(name);
        if matches_record && !already_selected {
            let changed = self.selection.toggle_token(name);
            self.notify_if(changed);
        }
    }

    fn notify_if(&mut self, changed: bool) {
        if !changed {
            return;
        }
        // Take the listener so the catalog stays borrowable meanwhile.
        let Some(mut listener) = self.on_change.take() else {
            return;
        };
        let (ids, records) = self.selected();
        listener(&ids, &records);
        self.on_change = Some(listener);
    }
}
