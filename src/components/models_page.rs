//! AI Models Screen
//!
//! Card grid over `GET /models`. Category and pricing filters are applied
//! server-side (changing one refetches); search, sort and paging run on the
//! fetched collection.

use collection_view::{CollectionController, CollectionView, SortDirection, SortSpec};
use leptos::prelude::*;

use crate::api::{model_source, ModelFilters, ModelSource};
use crate::components::{ErrorBanner, Pagination, SearchBox};
use crate::context::use_app_context;
use crate::formatters::{format_category, format_pricing, format_rating};
use crate::hooks::{use_collection, CollectionHandle};
use crate::models::{AiModel, MODEL_CATEGORIES, MODEL_SEARCH_FIELDS, MODEL_SORT_OPTIONS, PRICING_TYPES};

type ModelsHandle = CollectionHandle<AiModel, (), ModelSource>;

/// `"likeCount,desc"` -> descending on `likeCount`
fn parse_sort_option(value: &str) -> SortSpec {
    match value.split_once(',') {
        Some((key, "desc")) => SortSpec::descending(key),
        Some((key, _)) => SortSpec::ascending(key),
        None => SortSpec::ascending(value),
    }
}

fn sort_option_value(sort: &SortSpec) -> String {
    let direction = match sort.direction {
        SortDirection::Ascending => "asc",
        SortDirection::Descending => "desc",
    };
    format!("{},{}", sort.key, direction)
}

#[component]
pub fn ModelsPage() -> impl IntoView {
    let ctx = use_app_context();
    let config = ctx.config();
    let filters = RwSignal::new(ModelFilters::default());

    let default_sort = MODEL_SORT_OPTIONS
        .first()
        .map(|(value, _)| parse_sort_option(value))
        .unwrap_or_default();
    let handle: ModelsHandle = use_collection(
        CollectionController::new(MODEL_SEARCH_FIELDS, config.models_page_size).with_sort(default_sort),
        model_source(&config, &filters.get_untracked(), ctx.token().as_deref()),
    );
    let listing: Memo<CollectionView<AiModel>> = Memo::new(move |_| handle.view());

    let update_filters = move |change: fn(&mut ModelFilters, String), value: String| {
        filters.update(|f| change(f, value));
        let source = filters.with_untracked(|f| model_source(&ctx.config(), f, ctx.token().as_deref()));
        handle.requery(source);
    };

    let select = move |label: &'static str, options: &'static [&'static str], change: fn(&mut ModelFilters, String)| {
        view! {
            <select
                class="filter-select"
                on:change=move |ev| update_filters(change, event_target_value(&ev))
            >
                <option value="">{label}</option>
                {options.iter().map(|&option| view! {
                    <option value=option>{option.replace('_', " ")}</option>
                }).collect_view()}
            </select>
        }
    };

    view! {
        <section class="page models-page">
            <div class="page-header">
                <h1>"Explore AI Models"</h1>
            </div>

            <div class="toolbar">
                <SearchBox
                    value=Signal::derive(move || listing.with(|v| v.query.clone()))
                    on_search=move |query: String| handle.set_filter(query)
                    placeholder="Search models..."
                />
                {select("All Categories", MODEL_CATEGORIES, |f, v| f.category = v)}
                {select("All Pricing", PRICING_TYPES, |f, v| f.pricing_type = v)}
                <select
                    class="sort-select"
                    prop:value=move || listing.with(|v| sort_option_value(&v.sort))
                    on:change=move |ev| handle.set_sort(parse_sort_option(&event_target_value(&ev)))
                >
                    {MODEL_SORT_OPTIONS.iter().map(|&(value, label)| view! {
                        <option value=value>{label}</option>
                    }).collect_view()}
                </select>
            </div>

            <ErrorBanner
                message=Signal::derive(move || listing.with(|v| v.refresh_error.clone()))
                on_dismiss=move |_: ()| handle.dismiss_errors()
            />

            <Show
                when=move || !listing.with(|v| v.is_empty())
                fallback=move || view! {
                    <div class="empty-state">
                        {move || if listing.with(|v| v.is_loading()) { "Loading models..." } else { "No models found." }}
                    </div>
                }
            >
                <div class="model-grid">
                    <For
                        each=move || listing.with(|v| v.rows.clone())
                        key=|model| model.id
                        let:model
                    >
                        <ModelCard model=model />
                    </For>
                </div>
            </Show>

            <Pagination listing=listing on_goto=move |page: usize| handle.goto(page) />
        </section>
    }
}

#[component]
fn ModelCard(model: AiModel) -> impl IntoView {
    let pricing = format_pricing(&model);
    let category = format_category(model.model_category.as_deref());
    let rating = format_rating(model.average_rating);

    view! {
        <article class="model-card">
            <header>
                <h3>{model.model_name}</h3>
                <span class="model-category">{category}</span>
            </header>
            <p class="model-description">{model.model_description.unwrap_or_default()}</p>
            <footer class="model-stats">
                <span class="model-pricing">{pricing}</span>
                <span title="Rating">"★ " {rating}</span>
                <span title="Likes">"♥ " {model.like_count.unwrap_or(0)}</span>
                <span title="Views">"👁 " {model.view_count.unwrap_or(0)}</span>
            </footer>
        </article>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sort_option() {
        assert_eq!(parse_sort_option("likeCount,desc"), SortSpec::descending("likeCount"));
        assert_eq!(parse_sort_option("modelName,asc"), SortSpec::ascending("modelName"));
        assert_eq!(parse_sort_option("id"), SortSpec::ascending("id"));
    }

    #[test]
    fn test_sort_options_round_trip() {
        for (value, _) in MODEL_SORT_OPTIONS {
            assert_eq!(sort_option_value(&parse_sort_option(value)), *value);
        }
    }
}
