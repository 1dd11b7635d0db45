use chrono::TimeZone;
use newsmood_core::ArticleSource;

use super::*;

fn article(source: &str, title: &str, published_at: &str) -> Article {
    Article {
        title: title.to_string(),
        source: ArticleSource {
            name: source.to_string(),
        },
        published_at: published_at.to_string(),
        ..Article::default()
    }
}

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap()
}

fn analyzer() -> Analyzer {
    Analyzer::builtin()
}

#[test]
fn overall_distribution_of_empty_set_is_all_zero() {
    assert_eq!(
        overall_distribution(&analyzer(), &[]),
        SentimentDistribution::default()
    );
}

#[test]
fn overall_distribution_rounds_each_share() {
    let articles = vec![
        article("A", "great news", ""),
        article("A", "terrible news", ""),
        article("A", "plain news", ""),
    ];
    let dist = overall_distribution(&analyzer(), &articles);
    assert_eq!(
        dist,
        SentimentDistribution {
            positive: 33,
            neutral: 33,
            negative: 33
        }
    );
}

#[test]
fn overall_distribution_sums_to_about_one_hundred() {
    let titles = ["great", "awful", "the", "wonderful", "love", "hate", "cat"];
    for n in 1..=titles.len() {
        let articles: Vec<Article> = titles[..n].iter().map(|t| article("A", t, "")).collect();
        let total = overall_distribution(&analyzer(), &articles).total();
        assert!((99..=101).contains(&total), "n={n} total={total}");
    }
}

#[test]
fn overall_distribution_uses_title_and_description() {
    let mut a = article("A", "Quarterly update", "");
    a.description = "An excellent result".to_string();
    let dist = overall_distribution(&analyzer(), &[a]);
    assert_eq!(dist.positive, 100);
}

#[test]
fn by_source_single_busy_source() {
    let articles: Vec<Article> = (0..10)
        .map(|_| article("Acme", "great product", ""))
        .collect();
    assert_eq!(
        by_source(&analyzer(), &articles),
        vec![SourceBucket {
            name: "Acme".to_string(),
            positive: 100,
            neutral: 0,
            negative: 0,
        }]
    );
}

#[test]
fn by_source_skips_sources_with_two_or_fewer_articles() {
    let mut articles = vec![
        article("Small", "great", ""),
        article("Small", "great", ""),
    ];
    articles.extend((0..3).map(|_| article("Big", "awful", "")));
    let buckets = by_source(&analyzer(), &articles);
    assert_eq!(buckets.len(), 1);
    assert_eq!(buckets[0].name, "Big");
    assert_eq!(buckets[0].negative, 100);
}

#[test]
fn by_source_keeps_first_seen_order_and_caps_at_five() {
    let mut articles = Vec::new();
    // Larger sources seen later do not displace earlier ones.
    let sources = [
        ("Zeta", 3),
        ("Alpha", 9),
        ("Beta", 4),
        ("Gamma", 3),
        ("Delta", 5),
        ("Eps", 6),
        ("Last", 7),
    ];
    for (name, n) in sources {
        for _ in 0..n {
            articles.push(article(name, "news", ""));
        }
    }
    // Interleave a late article for an early source; order stays first-seen.
    articles.push(article("Zeta", "news", ""));

    let names: Vec<String> = by_source(&analyzer(), &articles)
        .into_iter()
        .map(|b| b.name)
        .collect();
    assert_eq!(names, vec!["Zeta", "Alpha", "Beta", "Gamma", "Delta"]);
}

#[test]
fn by_source_groups_missing_names_as_unknown() {
    let articles: Vec<Article> = (0..3).map(|_| article("", "news", "")).collect();
    let buckets = by_source(&analyzer(), &articles);
    assert_eq!(buckets[0].name, "Unknown");
    assert_eq!(buckets[0].neutral, 100);
}

#[test]
fn trailing_months_are_oldest_first() {
    assert_eq!(
        trailing_month_names(now()),
        vec!["May", "Jun", "Jul", "Aug", "Sep", "Oct"]
    );
}

#[test]
fn trailing_months_cross_year_boundary_without_duplicates() {
    let end_of_march = Utc.with_ymd_and_hms(2026, 3, 31, 0, 0, 0).unwrap();
    assert_eq!(
        trailing_month_names(end_of_march),
        vec!["Oct", "Nov", "Dec", "Jan", "Feb", "Mar"]
    );
}

#[test]
fn by_month_always_returns_six_zero_filled_buckets() {
    let buckets = by_month_at(&analyzer(), &[], now());
    assert_eq!(buckets.len(), 6);
    assert!(buckets.iter().all(|b| b.positive + b.neutral + b.negative == 0));
}

#[test]
fn by_month_buckets_articles_in_window() {
    let articles = vec![
        article("A", "great", "2026-10-01T08:00:00Z"),
        article("A", "plain", "2026-10-02T08:00:00Z"),
        article("A", "awful", "2026-08-15T08:00:00+02:00"),
        // After the window start but in a month that has no bucket.
        article("A", "great", "2026-04-25T08:00:00Z"),
        // Before the window start.
        article("A", "great", "2025-10-05T08:00:00Z"),
        article("A", "great", "not a date"),
    ];
    let buckets = by_month_at(&analyzer(), &articles, now());

    let months: Vec<&str> = buckets.iter().map(|b| b.month.as_str()).collect();
    assert_eq!(months, vec!["May", "Jun", "Jul", "Aug", "Sep", "Oct"]);

    let oct = &buckets[5];
    assert_eq!((oct.positive, oct.neutral, oct.negative), (50, 50, 0));
    let aug = &buckets[3];
    assert_eq!((aug.positive, aug.neutral, aug.negative), (0, 0, 100));
    for bucket in [&buckets[0], &buckets[1], &buckets[2], &buckets[4]] {
        assert_eq!(bucket.positive + bucket.neutral + bucket.negative, 0);
    }
}

#[test]
fn by_month_buckets_sum_to_about_one_hundred_or_zero() {
    let articles = vec![
        article("A", "great", "2026-09-01T00:00:00Z"),
        article("A", "awful", "2026-09-02T00:00:00Z"),
        article("A", "cat", "2026-09-03T00:00:00Z"),
        article("A", "love", "2026-07-03T00:00:00Z"),
    ];
    for bucket in by_month_at(&analyzer(), &articles, now()) {
        let total = bucket.positive + bucket.neutral + bucket.negative;
        assert!(total == 0 || (99..=101).contains(&total), "{bucket:?}");
    }
}

#[test]
fn reducers_are_idempotent() {
    let articles = vec![
        article("Acme", "great", "2026-09-01T00:00:00Z"),
        article("Acme", "awful", "2026-08-01T00:00:00Z"),
        article("Acme", "cat", "2026-07-01T00:00:00Z"),
    ];
    let a = analyzer();
    assert_eq!(
        overall_distribution(&a, &articles),
        overall_distribution(&a, &articles)
    );
    assert_eq!(by_source(&a, &articles), by_source(&a, &articles));
    assert_eq!(
        by_month_at(&a, &articles, now()),
        by_month_at(&a, &articles, now())
    );
}
