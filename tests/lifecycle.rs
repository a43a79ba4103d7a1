//! End-to-end lifecycle tests over a real RocksDB store: the full page
//! copy-on-write scenario and a scheduler tick driving real executors.

use cinecms_commons::{JobScheduleType, JobStatus, JobType, PageId};
use cinecms_configs::ServerConfig;
use cinecms_content::{ContentCache, ListPagesQuery, NewPage, UpdatePage};
use cinecms_core::AppContext;
use cinecms_jobs::NewJob;
use cinecms_store::{RocksDBBackend, RocksDbInit};
use std::collections::HashMap;
use std::sync::Arc;
use tempfile::TempDir;

fn open_context(temp_dir: &TempDir) -> Arc<AppContext> {
    let mut config = ServerConfig::default();
    config.storage.data_path = temp_dir.path().to_str().unwrap().to_string();
    config.security.admin_token = "it-token".to_string();

    let db_path = config.storage.rocksdb_dir();
    std::fs::create_dir_all(&db_path).unwrap();
    let partitions = AppContext::partitions();
    let db = RocksDbInit::new(db_path.to_str().unwrap(), &partitions)
        .open()
        .unwrap();
    AppContext::init(Arc::new(RocksDBBackend::new(db)), config)
}

fn new_page(slug: &str, link_target: &str) -> NewPage {
    NewPage {
        title: format!("Page {}", slug),
        seo_title: None,
        meta_description: None,
        slug: slug.to_string(),
        link_target: link_target.to_string(),
        components: vec![],
    }
}

#[test]
fn page_lineage_survives_a_real_store() {
    let temp_dir = TempDir::new().unwrap();
    let context = open_context(&temp_dir);
    let pages = context.pages();

    // create → publish → update → publish, the §about-us scenario
    let page = pages.create(new_page("about-us", "ABOUT"), None).unwrap();
    let published = pages.publish(&page.id, None).unwrap();
    assert!(published.is_published);

    let draft = pages
        .update(
            &published.id,
            UpdatePage {
                title: "About us (new)".to_string(),
                seo_title: None,
                meta_description: None,
                slug: "about-us-2".to_string(),
                link_target: "ABOUT".to_string(),
                components: vec![],
            },
            None,
        )
        .unwrap();
    assert_eq!(draft.original_page_id, Some(published.id.clone()));

    // Original row unchanged while the draft is pending
    assert_eq!(
        pages.get_by_slug("about-us", false).unwrap().id,
        published.id
    );

    let republished = pages.publish(&draft.id, None).unwrap();
    assert_eq!(republished.id, published.id);
    assert_eq!(republished.slug, "about-us-2");
    assert_eq!(republished.version, 2);

    // Exactly one row left in the lineage
    let all = pages
        .list(ListPagesQuery {
            page_number: 1,
            page_size: 100,
            include_drafts: true,
            ..Default::default()
        })
        .unwrap();
    assert_eq!(all.total_count, 1);
    assert!(pages.get_by_slug("about-us", true).is_err());

    // The draft row id no longer resolves
    let gone: PageId = draft.id;
    assert!(pages.publish(&gone, None).is_err());
}

#[tokio::test]
async fn scheduler_tick_runs_real_executors_against_the_store() {
    let temp_dir = TempDir::new().unwrap();
    let context = open_context(&temp_dir);

    // Content for the sitemap
    let page = context
        .pages()
        .create(new_page("about-us", "ABOUT"), None)
        .unwrap();
    context.pages().publish(&page.id, None).unwrap();

    // A recurring sitemap job, forced due now
    let job = context
        .jobs()
        .create(
            NewJob {
                name: "Sitemap".to_string(),
                description: "Nightly sitemap generation".to_string(),
                job_type: JobType::GenerateSitemap,
                schedule_type: JobScheduleType::Recurring,
                cron_expression: Some("*/30 * * * * *".to_string()),
                parameters: HashMap::new(),
                start_immediately: true,
            },
            None,
        )
        .unwrap();
    let job = context.jobs().start(&job.id).unwrap();

    assert_eq!(context.jobs().process_due_jobs().await.unwrap(), 1);

    // Recurring job cycled back to Pending with next_run advanced
    let cycled = context.jobs().get(&job.id).unwrap();
    assert_eq!(cycled.status, JobStatus::Pending);
    assert!(cycled.next_run.unwrap() > job.next_run.unwrap());
    assert!(cycled.parameters.contains_key("LastGenerationTime"));
    assert_eq!(cycled.parameters.get("UrlCount"), Some(&"1".to_string()));

    // The sitemap landed in the public dir
    let sitemap = std::fs::read_to_string(
        context.config().storage.public_dir().join("sitemap.xml"),
    )
    .unwrap();
    assert!(sitemap.contains("/pages/about-us"));
}

#[tokio::test]
async fn update_search_index_executor_populates_the_cache() {
    let temp_dir = TempDir::new().unwrap();
    let context = open_context(&temp_dir);

    let page = context
        .pages()
        .create(new_page("about-us", "ABOUT"), None)
        .unwrap();
    context.pages().publish(&page.id, None).unwrap();

    let job = context
        .jobs()
        .create(
            NewJob {
                name: "Search index".to_string(),
                description: String::new(),
                job_type: JobType::UpdateSearchIndex,
                schedule_type: JobScheduleType::RunOnce,
                cron_expression: None,
                parameters: HashMap::new(),
                start_immediately: true,
            },
            None,
        )
        .unwrap();

    assert_eq!(context.jobs().process_due_jobs().await.unwrap(), 1);
    assert_eq!(context.jobs().get(&job.id).unwrap().status, JobStatus::Completed);

    let cached = context.cache().get("search-index").unwrap();
    assert!(cached.contains("/pages/about-us"));
}
