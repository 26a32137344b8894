//! Integration tests for domain-scout

use async_trait::async_trait;
use domain_scout::{
    domain::providers::domainr::parse_status_response,
    tld::{mode_base_tlds, TldCatalog},
    tools, AvailabilityProvider, CheckAvailabilityRequest, CreativityLevel, DomainScout,
    DomainStatus, ExploreDeepRequest, Result, ScoutError, SearchMode, Strategy, SuggestRequest,
    TextGenerator,
};
use parking_lot::Mutex;
use serde_json::json;
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

/// Text generator that records prompts and replies with a fixed script
struct FakeLlm {
    reply: Option<String>,
    prompts: Mutex<Vec<String>>,
}

impl FakeLlm {
    fn new(reply: Option<&str>) -> Arc<Self> {
        Arc::new(Self {
            reply: reply.map(str::to_string),
            prompts: Mutex::new(Vec::new()),
        })
    }
}

#[async_trait]
impl TextGenerator for FakeLlm {
    async fn complete(&self, prompt: &str, _temperature: f32) -> Result<String> {
        self.prompts.lock().push(prompt.to_string());
        self.reply
            .clone()
            .ok_or_else(|| ScoutError::provider("fake-llm", "offline", None))
    }

    fn name(&self) -> &'static str {
        "fake-llm"
    }

    fn is_ready(&self) -> bool {
        true
    }
}

/// Availability provider: `.io` is open, `prem` names are premium, `fail` names error
struct FakeRegistry {
    requests: Mutex<Vec<String>>,
}

impl FakeRegistry {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            requests: Mutex::new(Vec::new()),
        })
    }

    fn request_count(&self) -> usize {
        self.requests.lock().len()
    }
}

#[async_trait]
impl AvailabilityProvider for FakeRegistry {
    async fn check_status(&self, domains: &[String]) -> Result<Vec<DomainStatus>> {
        self.requests.lock().extend(domains.iter().cloned());
        domains
            .iter()
            .map(|domain| {
                if domain.starts_with("fail") {
                    return Err(ScoutError::provider("fake-registry", "HTTP 500", Some("500".to_string())));
                }
                let premium = domain.starts_with("prem");
                Ok(DomainStatus {
                    domain: domain.clone(),
                    available: premium || domain.ends_with(".io"),
                    is_premium: premium,
                    premium_price: premium.then_some(2500.0),
                })
            })
            .collect()
    }

    fn batch_size(&self) -> usize {
        5
    }

    fn name(&self) -> &'static str {
        "fake-registry"
    }
}

fn scout(llm: Arc<FakeLlm>, registry: Arc<FakeRegistry>, catalog: TldCatalog) -> DomainScout {
    DomainScout::new(llm, registry, Arc::new(catalog))
        .with_batch_delay(Duration::ZERO)
        .with_rng_seed(Some(2024))
}

fn small_catalog() -> TldCatalog {
    TldCatalog::parse(
        ".com\n.io\n.ai\n.co\n.net\n.org\n.app\n.dev\n.xyz\n.me\n.ly\n.al\n.tech\n.store\n.de\n.fr\n.uk\n.us\n.ca\n.shop\n.club\n.fun\n.zone",
    )
    .unwrap()
}

#[tokio::test]
async fn test_suggest_competitive_without_availability() {
    let registry = FakeRegistry::new();
    let scout = scout(
        FakeLlm::new(Some("brinery.io\npicklehaus.co\nnot a domain")),
        registry.clone(),
        TldCatalog::embedded(),
    );

    let mut request = SuggestRequest::new("artisanal pickle factory");
    request.mode = Some("competitive".to_string());
    request.check_availability = Some(false);

    let result = scout.suggest(&request).await.unwrap();

    assert_eq!(result.keywords, vec!["artisanal", "pickle", "factory"]);
    let competitive = mode_base_tlds(SearchMode::Competitive);
    assert_eq!(&result.tlds_considered[..competitive.len()], competitive);

    let all: Vec<_> = result.available.iter().chain(&result.taken).chain(&result.premium).collect();
    assert!(all.iter().any(|r| {
        r.strategy == Strategy::DirectKeyword
            && (r.domain.starts_with("pickle.") || r.domain.starts_with("factory."))
            && competitive.contains(&r.tld.as_str())
    }));

    assert!(!result.stats.availability_checked);
    assert_eq!(result.stats.total_checked, 0);
    assert_eq!(result.stats.mode, SearchMode::Competitive);
    assert_eq!(registry.request_count(), 0);
    assert!(result.stats.creativity_score > 0.0);
}

#[tokio::test]
async fn test_small_suggestion_counts_keep_direct_keywords() {
    let competitive = mode_base_tlds(SearchMode::Competitive);

    for count in [5, 7, 10] {
        let scout = scout(FakeLlm::new(Some("brinery.io")), FakeRegistry::new(), TldCatalog::embedded());
        let mut request = SuggestRequest::new("artisanal pickle factory");
        request.mode = Some("competitive".to_string());
        request.max_suggestions = Some(count);
        request.check_availability = Some(false);

        let result = scout.suggest(&request).await.unwrap();
        assert!(result.taken.len() <= count);
        assert!(result.taken.iter().any(|r| {
            r.strategy == Strategy::DirectKeyword
                && r.domain.starts_with("pickle.")
                && competitive.contains(&r.tld.as_str())
        }));
    }
}

#[tokio::test]
async fn test_suggest_checks_and_partitions() {
    let registry = FakeRegistry::new();
    let scout = scout(
        FakeLlm::new(Some("premiumjar.io\nbrinery.io\nfailsafe.com\npickly.com")),
        registry.clone(),
        TldCatalog::embedded(),
    );

    let mut request = SuggestRequest::new("pickle jar shop");
    request.max_suggestions = Some(12);

    let result = scout.suggest(&request).await.unwrap();
    let total = result.available.len() + result.taken.len() + result.premium.len();

    assert!(total <= 12);
    assert_eq!(result.stats.total_generated, total);
    assert_eq!(result.stats.total_checked, total);
    assert_eq!(registry.request_count(), total);

    assert!(result.available.iter().all(|r| r.available && !r.is_premium));
    assert!(result.taken.iter().all(|r| !r.available));
    assert!(result.premium.iter().all(|r| r.is_premium && r.premium_price == Some(2500.0)));
    assert!(result.taken.iter().any(|r| r.domain == "failsafe.com"));

    for list in [&result.available, &result.taken, &result.premium] {
        assert!(list.windows(2).all(|w| w[0].score >= w[1].score));
        assert!(list.iter().all(|r| (1.0..=10.0).contains(&r.score)));
    }

    let unique: HashSet<_> = result
        .available
        .iter()
        .chain(&result.taken)
        .chain(&result.premium)
        .map(|r| r.domain.clone())
        .collect();
    assert_eq!(unique.len(), total);
    assert!(!result.insights.is_empty());
}

#[tokio::test]
async fn test_suggest_survives_llm_outage() {
    let scout = scout(FakeLlm::new(None), FakeRegistry::new(), TldCatalog::embedded());
    let mut request = SuggestRequest::new("coffee roastery");
    request.check_availability = Some(false);

    let result = scout.suggest(&request).await.unwrap();
    let strategies = &result.stats.strategies_used;

    assert!(strategies.contains(&Strategy::Fallback));
    assert!(!strategies.iter().any(|s| s.is_llm()));
}

#[tokio::test]
async fn test_suggest_rejects_out_of_range_count() {
    let llm = FakeLlm::new(Some("pickle.io"));
    let scout = scout(llm.clone(), FakeRegistry::new(), TldCatalog::embedded());

    let mut request = SuggestRequest::new("pickles");
    request.max_suggestions = Some(51);

    let err = scout.suggest(&request).await.unwrap_err();
    assert!(err.is_validation());
    assert!(llm.prompts.lock().is_empty());
}

#[tokio::test]
async fn test_check_rejects_both_shapes_without_calling_provider() {
    let registry = FakeRegistry::new();
    let scout = scout(FakeLlm::new(None), registry.clone(), small_catalog());

    let request = CheckAvailabilityRequest {
        domain: Some("pickle.io".to_string()),
        domains: Some(vec!["brine.io".to_string()]),
    };
    let err = scout.check_availability(&request).await.unwrap_err();

    assert!(err.is_validation());
    assert_eq!(registry.request_count(), 0);
}

#[tokio::test]
async fn test_check_list_keeps_every_domain() {
    let registry = FakeRegistry::new();
    let scout = scout(FakeLlm::new(None), registry.clone(), small_catalog());

    let domains = ["pickle.io", "failwhale.io", "pickle.com", "brine.io", "jar.co", "crunch.io", "fail.ai"];
    let report = scout
        .check_availability(&CheckAvailabilityRequest::many(domains))
        .await
        .unwrap();

    assert_eq!(report.results.len(), domains.len());
    for (status, domain) in report.results.iter().zip(domains) {
        assert_eq!(status.domain, domain);
    }
    assert_eq!(report.results[1], DomainStatus::unavailable("failwhale.io"));
    assert_eq!(report.available_count, 3);
    assert_eq!(report.provider, "fake-registry");
}

#[tokio::test]
async fn test_single_check_propagates_provider_error() {
    let scout = scout(FakeLlm::new(None), FakeRegistry::new(), small_catalog());

    let ok = scout
        .check_availability(&CheckAvailabilityRequest::single("Pickle.IO"))
        .await
        .unwrap();
    assert_eq!(ok.results[0].domain, "pickle.io");
    assert!(ok.results[0].available);

    let err = scout
        .check_availability(&CheckAvailabilityRequest::single("failover.com"))
        .await
        .unwrap_err();
    assert!(matches!(err, ScoutError::Provider { .. }));
}

#[tokio::test]
async fn test_explore_covers_each_tld_once() {
    let llm = FakeLlm::new(Some("pickle.io\npickle.al\npremiumpickle.com\nbrine.tech"));
    let registry = FakeRegistry::new();
    let catalog = small_catalog();
    let total = catalog.len();
    let scout = scout(llm.clone(), registry.clone(), catalog);

    let mut request = ExploreDeepRequest::new("artisanal pickle factory");
    request.batch_size = Some(10);
    request.max_batches = Some(5);
    request.creativity_level = Some(CreativityLevel::Conservative);
    request.check_availability = Some(true);

    let result = scout.explore_deep(&request).await.unwrap();

    // 23 TLDs, at most 5 batches -> 5 per batch
    assert_eq!(result.stats.batch_size_used, 5);
    assert_eq!(result.stats.batches_processed, 5);
    assert_eq!(result.stats.total_tlds, total);
    assert_eq!(result.stats.tlds_explored, total);
    assert_eq!(result.stats.coverage_percent, 100.0);
    assert!(result.stats.availability_checking);

    let prompts = llm.prompts.lock().clone();
    assert_eq!(prompts.len(), 5);
    let mut offered = Vec::new();
    for prompt in &prompts {
        let line = prompt.lines().find(|l| l.starts_with("Allowed TLDs")).unwrap();
        let (_, list) = line.split_once("): ").unwrap();
        offered.extend(list.split(", ").map(str::to_string));
    }
    let unique: HashSet<_> = offered.iter().cloned().collect();
    assert_eq!(offered.len(), total);
    assert_eq!(unique.len(), total);

    assert!(result.standouts.len() <= 30);
    assert!(result.standouts.iter().all(|s| s.score >= 6.0));
    assert!(result.standouts.windows(2).all(|w| w[0].score >= w[1].score));

    let available = result.available_standouts.as_ref().unwrap();
    assert!(available.iter().all(|r| r.available || r.is_premium));
    let standout_domains: HashSet<_> = result.standouts.iter().map(|s| s.domain.clone()).collect();
    assert!(available.iter().all(|r| standout_domains.contains(&r.domain)));
    assert_eq!(registry.request_count(), result.standouts.len());
}

/// Registry that lists every name as a premium sale, never as open
struct PremiumRegistry;

#[async_trait]
impl AvailabilityProvider for PremiumRegistry {
    async fn check_status(&self, domains: &[String]) -> Result<Vec<DomainStatus>> {
        Ok(domains
            .iter()
            .map(|domain| DomainStatus {
                domain: domain.clone(),
                available: false,
                is_premium: true,
                premium_price: Some(4800.0),
            })
            .collect())
    }

    fn batch_size(&self) -> usize {
        10
    }

    fn name(&self) -> &'static str {
        "premium-registry"
    }
}

#[tokio::test]
async fn test_explore_surfaces_premium_standouts() {
    let llm = FakeLlm::new(Some("pickle.com\npickle.io\npickle.ai\npickle.co"));
    let scout = DomainScout::new(llm, Arc::new(PremiumRegistry), Arc::new(small_catalog()))
        .with_batch_delay(Duration::ZERO)
        .with_rng_seed(Some(11));

    let mut request = ExploreDeepRequest::new("pickle");
    request.keywords = Some(vec!["pickle".to_string()]);
    request.batch_size = Some(10);
    request.max_batches = Some(3);
    request.check_availability = Some(true);

    let result = scout.explore_deep(&request).await.unwrap();

    assert!(!result.standouts.is_empty());
    let listed = result.available_standouts.as_ref().unwrap();
    assert_eq!(listed.len(), result.standouts.len());
    assert!(listed.iter().all(|r| r.is_premium && !r.available));
    assert!(listed.iter().all(|r| r.premium_price == Some(4800.0)));
}

#[tokio::test]
async fn test_explore_rejects_bad_bounds() {
    let llm = FakeLlm::new(None);
    let scout = scout(llm.clone(), FakeRegistry::new(), small_catalog());

    let mut request = ExploreDeepRequest::new("pickles");
    request.max_batches = Some(0);

    assert!(scout.explore_deep(&request).await.unwrap_err().is_validation());
    assert!(llm.prompts.lock().is_empty());
}

#[tokio::test]
async fn test_tool_dispatch() {
    let registry = FakeRegistry::new();
    let scout = scout(FakeLlm::new(None), registry.clone(), small_catalog());

    let response = tools::call_tool(
        &scout,
        tools::CHECK_AVAILABILITY,
        json!({ "domain": "pickle.io", "domains": ["brine.io"] }),
    )
    .await;
    assert!(response.is_error);
    assert!(response.first_text().contains("not both"));
    assert_eq!(registry.request_count(), 0);

    let response = tools::call_tool(&scout, tools::CHECK_AVAILABILITY, json!({ "domains": ["pickle.io"] })).await;
    assert!(!response.is_error);
    let body: serde_json::Value = serde_json::from_str(response.first_text()).unwrap();
    assert_eq!(body["results"][0]["available"], true);

    let response = tools::call_tool(&scout, "registerDomain", json!({})).await;
    assert!(response.is_error);
}

#[tokio::test]
async fn test_request_lines() {
    let scout = scout(FakeLlm::new(None), FakeRegistry::new(), small_catalog());

    let listed = tools::handle_line(&scout, r#"{"jsonrpc":"2.0","id":1,"method":"tools/list"}"#)
        .await
        .unwrap();
    assert_eq!(listed["id"], 1);
    assert_eq!(listed["result"]["tools"].as_array().unwrap().len(), 3);

    let missing = tools::handle_line(&scout, r#"{"id":2,"method":"resources/list"}"#)
        .await
        .unwrap();
    assert_eq!(missing["error"]["code"], -32601);

    let garbage = tools::handle_line(&scout, "{not json").await.unwrap();
    assert_eq!(garbage["error"]["code"], -32700);

    assert!(tools::handle_line(&scout, r#"{"method":"notifications/initialized"}"#)
        .await
        .is_none());
}

#[test]
fn test_active_status_is_not_available() {
    let body = r#"{"status":[{"domain":"example.com","zone":"com","status":"active","summary":"active"}]}"#;
    let statuses = parse_status_response(body).unwrap();
    assert!(!statuses[0].available);
    assert!(!statuses[0].is_premium);
}
