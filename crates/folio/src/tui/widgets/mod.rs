pub(super) mod profile_viewer;
pub(super) mod project_list;
pub(super) mod project_modal;
pub(super) mod status;
pub(super) mod util;

pub(super) use profile_viewer::profile_viewer_area;
pub(super) use project_modal::modal_area;

#[cfg(test)]
pub(super) fn truncate_with_ellipsis(input: &str, max_graphemes: usize) -> std::borrow::Cow<'_, str> {
    util::truncate_with_ellipsis(input, max_graphemes)
}
