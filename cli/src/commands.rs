//! Command dispatch: one backend call per subcommand.

#[cfg(test)]
#[path = "commands_test.rs"]
mod commands_test;

use records::query::{
    AffiliateLinkQuery, AffiliatePerformanceQuery, CampaignPerformanceQuery, CompareQuery, Granularity,
    LinkSearchQuery, ListQuery, PeriodQuery, ReportQuery, ReportType, TopTweetsQuery, TrendsQuery,
};
use records::routes;
use records::validate;
use records::{
    AuthSession, BulkSchedule, BulkScheduleItem, CampaignStatus, CampaignUpdate, Credentials, ExportDataType,
    ExportFormat, ExportRequest, NewAffiliateLink, NewCampaign, NewTweet, Registration, ScheduleTweet,
};
use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

use crate::api::ApiClient;
use crate::{
    AnalyticsSubcommand, AuthSubcommand, CampaignsSubcommand, CliError, Command, LinksSubcommand, TweetsSubcommand,
};

pub(crate) async fn run(api: &mut ApiClient, command: Command) -> Result<Value, CliError> {
    match command {
        Command::Health => get(api, routes::HEALTH, &[]).await,
        Command::Auth(auth) => run_auth(api, auth.command).await,
        Command::Campaigns(campaigns) => run_campaigns(api, campaigns.command).await,
        Command::Tweets(tweets) => run_tweets(api, tweets.command).await,
        Command::Links(links) => run_links(api, links.command).await,
        Command::Analytics(analytics) => run_analytics(api, analytics.command).await,
    }
}

async fn run_auth(api: &mut ApiClient, command: AuthSubcommand) -> Result<Value, CliError> {
    match command {
        AuthSubcommand::Login { email, password } => {
            let (email, password) = validate::credentials(&email, &password).map_err(CliError::Invalid)?;
            let value = send(api, Method::POST, routes::AUTH_LOGIN, &Credentials { email, password }).await?;
            adopt_session(api, &value)?;
            Ok(value)
        }
        AuthSubcommand::Register { username, email, password } => {
            let body = registration(&username, &email, &password)?;
            let value = send(api, Method::POST, routes::AUTH_REGISTER, &body).await?;
            adopt_session(api, &value)?;
            Ok(value)
        }
        AuthSubcommand::Profile => get(api, routes::AUTH_PROFILE, &[]).await,
        AuthSubcommand::Logout => {
            let value = empty(api, Method::POST, routes::AUTH_LOGOUT).await?;
            api.clear_tokens();
            Ok(value)
        }
    }
}

async fn run_campaigns(api: &mut ApiClient, command: CampaignsSubcommand) -> Result<Value, CliError> {
    match command {
        CampaignsSubcommand::List { status, page, per_page } => {
            let query = ListQuery { page, per_page, status, campaign_id: None };
            get(api, routes::CAMPAIGNS, &query.pairs()).await
        }
        CampaignsSubcommand::Show { id } => get(api, &routes::campaign(id), &[]).await,
        CampaignsSubcommand::Create { name, description, niche, status } => {
            let body = new_campaign(&name, &description, niche.as_deref(), status.as_deref())?;
            send(api, Method::POST, routes::CAMPAIGNS, &body).await
        }
        CampaignsSubcommand::Update { id, name, description, niche, status } => {
            let body = campaign_update(name.as_deref(), description, niche, status.as_deref())?;
            send(api, Method::PUT, &routes::campaign(id), &body).await
        }
        CampaignsSubcommand::Activate { id } => empty(api, Method::POST, &routes::campaign_activate(id)).await,
        CampaignsSubcommand::Pause { id } => empty(api, Method::POST, &routes::campaign_pause(id)).await,
        CampaignsSubcommand::Delete { id } => empty(api, Method::DELETE, &routes::campaign(id)).await,
        CampaignsSubcommand::Performance { id } => get(api, &routes::campaign_performance(id), &[]).await,
    }
}

async fn run_tweets(api: &mut ApiClient, command: TweetsSubcommand) -> Result<Value, CliError> {
    match command {
        TweetsSubcommand::List { status, campaign_id, page, per_page } => {
            let query = ListQuery { page, per_page, status, campaign_id };
            get(api, routes::TWEETS, &query.pairs()).await
        }
        TweetsSubcommand::Show { id } => get(api, &routes::tweet(id), &[]).await,
        TweetsSubcommand::Create { content, campaign_id, affiliate_link_id, scheduled_time } => {
            let body = new_tweet(&content, campaign_id, affiliate_link_id, scheduled_time)?;
            send(api, Method::POST, routes::TWEETS, &body).await
        }
        TweetsSubcommand::Schedule { id, at } => {
            let scheduled_time = validate::optional(&at).ok_or(CliError::Invalid("Pick a schedule time."))?;
            send(api, Method::POST, &routes::tweet_schedule(id), &ScheduleTweet { scheduled_time }).await
        }
        TweetsSubcommand::Cancel { id } => empty(api, Method::POST, &routes::tweet_cancel(id)).await,
        TweetsSubcommand::Post { id } => empty(api, Method::POST, &routes::tweet_post(id)).await,
        TweetsSubcommand::Delete { id } => empty(api, Method::DELETE, &routes::tweet(id)).await,
        TweetsSubcommand::Performance { id } => get(api, &routes::tweet_performance(id), &[]).await,
        TweetsSubcommand::BulkSchedule { items } => {
            let tweets = items.iter().map(String::as_str).map(bulk_item).collect::<Result<Vec<_>, _>>()?;
            send(api, Method::POST, routes::TWEETS_BULK_SCHEDULE, &BulkSchedule { tweets }).await
        }
    }
}

async fn run_links(api: &mut ApiClient, command: LinksSubcommand) -> Result<Value, CliError> {
    match command {
        LinksSubcommand::List { search, active_only, page, per_page } => {
            let query = AffiliateLinkQuery {
                page,
                per_page,
                search: search.as_deref().and_then(validate::optional),
                active_only: active_only.then_some(true),
            };
            get(api, routes::AFFILIATE_LINKS, &query.pairs()).await
        }
        LinksSubcommand::Create { url, product_name, commission_rate, category, utm_source, utm_medium, utm_campaign } => {
            let body = new_link(&url, &product_name, &commission_rate, category.as_deref(), [
                utm_source.as_deref(),
                utm_medium.as_deref(),
                utm_campaign.as_deref(),
            ])?;
            send(api, Method::POST, routes::AFFILIATE_LINKS, &body).await
        }
        LinksSubcommand::Toggle { id } => empty(api, Method::POST, &routes::affiliate_link_toggle(id)).await,
        LinksSubcommand::Delete { id } => empty(api, Method::DELETE, &routes::affiliate_link(id)).await,
        LinksSubcommand::Performance { id, days } => {
            get(api, &routes::affiliate_link_performance(id), &PeriodQuery { days }.pairs()).await
        }
        LinksSubcommand::Search { query, category, brand, min_commission, max_commission, all, limit } => {
            let query = LinkSearchQuery {
                text: query,
                category,
                brand,
                min_commission,
                max_commission,
                active_only: Some(!all),
                limit,
            };
            get(api, routes::AFFILIATE_LINKS_SEARCH, &query.pairs()).await
        }
        LinksSubcommand::Categories => get(api, routes::AFFILIATE_LINKS_CATEGORIES, &[]).await,
    }
}

async fn run_analytics(api: &mut ApiClient, command: AnalyticsSubcommand) -> Result<Value, CliError> {
    match command {
        AnalyticsSubcommand::Dashboard { days } => {
            get(api, routes::ANALYTICS_DASHBOARD, &PeriodQuery { days }.pairs()).await
        }
        AnalyticsSubcommand::Trends { days, granularity } => {
            let granularity =
                Granularity::parse(&granularity).ok_or(CliError::Invalid("Granularity must be daily, weekly or monthly."))?;
            let query = TrendsQuery { period: PeriodQuery { days }, granularity };
            get(api, routes::ANALYTICS_ENGAGEMENT_TRENDS, &query.pairs()).await
        }
        AnalyticsSubcommand::TopTweets { days, limit } => {
            let query = TopTweetsQuery { period: PeriodQuery { days }, limit };
            get(api, routes::ANALYTICS_TOP_TWEETS, &query.pairs()).await
        }
        AnalyticsSubcommand::CampaignPerformance { days, campaign_id } => {
            let query = CampaignPerformanceQuery { period: PeriodQuery { days }, campaign_id };
            get(api, routes::ANALYTICS_CAMPAIGN_PERFORMANCE, &query.pairs()).await
        }
        AnalyticsSubcommand::AffiliatePerformance { days, link_id } => {
            let query = AffiliatePerformanceQuery { period: PeriodQuery { days }, affiliate_link_id: link_id };
            get(api, routes::ANALYTICS_AFFILIATE_PERFORMANCE, &query.pairs()).await
        }
        AnalyticsSubcommand::Report { start, end, report_type } => {
            let report_type = ReportType::parse(&report_type)
                .ok_or(CliError::Invalid("Report type must be summary, detailed, campaign or affiliate."))?;
            let query = ReportQuery { start_date: start, end_date: end, report_type };
            get(api, routes::ANALYTICS_REPORTS, &query.pairs()).await
        }
        AnalyticsSubcommand::Compare { period1_start, period1_end, period2_start, period2_end } => {
            let query = CompareQuery::new([&period1_start, &period1_end, &period2_start, &period2_end].map(String::as_str))
                .map_err(CliError::Invalid)?;
            get(api, routes::ANALYTICS_COMPARE, &query.pairs()).await
        }
        AnalyticsSubcommand::Export { format, data_type, start, end } => {
            let body = export_request(&format, &data_type, start, end)?;
            send(api, Method::POST, routes::ANALYTICS_EXPORT, &body).await
        }
    }
}

// =============================================================================
// TRANSPORT SHORTHANDS
// =============================================================================

async fn get(api: &mut ApiClient, path: &str, query: &[(&'static str, String)]) -> Result<Value, CliError> {
    Ok(api.request(Method::GET, path, query, None).await?)
}

async fn send<B: Serialize>(api: &mut ApiClient, method: Method, path: &str, body: &B) -> Result<Value, CliError> {
    let body = serde_json::to_value(body)?;
    Ok(api.request(method, path, &[], Some(&body)).await?)
}

async fn empty(api: &mut ApiClient, method: Method, path: &str) -> Result<Value, CliError> {
    Ok(api.request(method, path, &[], None).await?)
}

fn adopt_session(api: &mut ApiClient, value: &Value) -> Result<(), CliError> {
    let session: AuthSession = serde_json::from_value(value.clone())?;
    api.set_tokens(&session.tokens());
    Ok(())
}

// =============================================================================
// BODY BUILDERS
// =============================================================================

fn registration(username: &str, email: &str, password: &str) -> Result<Registration, CliError> {
    let username = validate::username(username).map_err(CliError::Invalid)?;
    let (email, _) = validate::credentials(email, password).map_err(CliError::Invalid)?;
    let password = validate::new_password(password, password).map_err(CliError::Invalid)?;
    Ok(Registration { email, username, password })
}

pub(crate) fn campaign_status(raw: &str) -> Result<CampaignStatus, CliError> {
    match CampaignStatus::from(raw.trim().to_lowercase()) {
        CampaignStatus::Other(_) => Err(CliError::Invalid("Status must be draft, active, paused or completed.")),
        known => Ok(known),
    }
}

pub(crate) fn new_campaign(
    name: &str,
    description: &str,
    niche: Option<&str>,
    status: Option<&str>,
) -> Result<NewCampaign, CliError> {
    Ok(NewCampaign {
        name: validate::campaign_name(name).map_err(CliError::Invalid)?,
        description: description.trim().to_owned(),
        niche: niche.and_then(validate::optional),
        status: status.map(campaign_status).transpose()?,
        schedule: None,
    })
}

pub(crate) fn campaign_update(
    name: Option<&str>,
    description: Option<String>,
    niche: Option<String>,
    status: Option<&str>,
) -> Result<CampaignUpdate, CliError> {
    Ok(CampaignUpdate {
        name: name.map(validate::campaign_name).transpose().map_err(CliError::Invalid)?,
        description,
        niche,
        status: status.map(campaign_status).transpose()?,
        schedule: None,
    })
}

pub(crate) fn new_tweet(
    content: &str,
    campaign_id: Option<i64>,
    affiliate_link_id: Option<i64>,
    scheduled_time: Option<String>,
) -> Result<NewTweet, CliError> {
    Ok(NewTweet {
        content: validate::tweet_content(content).map_err(CliError::Invalid)?,
        campaign_id,
        affiliate_link_id,
        scheduled_time: scheduled_time.as_deref().and_then(validate::optional),
        media: Vec::new(),
        status: None,
    })
}

/// Parse `TWEET_ID=TIME`.
pub(crate) fn bulk_item(raw: &str) -> Result<BulkScheduleItem, CliError> {
    let invalid = || CliError::BulkItem(raw.to_owned());
    let (id, time) = raw.split_once('=').ok_or_else(invalid)?;
    let tweet_id = id.trim().parse().map_err(|_| invalid())?;
    let scheduled_time = validate::optional(time).ok_or_else(invalid)?;
    Ok(BulkScheduleItem { tweet_id, scheduled_time })
}

/// `links create` body; `utm` is `[source, medium, campaign]`.
pub(crate) fn new_link(
    url: &str,
    product_name: &str,
    commission_rate: &str,
    category: Option<&str>,
    utm: [Option<&str>; 3],
) -> Result<NewAffiliateLink, CliError> {
    let [utm_source, utm_medium, utm_campaign] = utm.map(|value| value.and_then(validate::optional));
    Ok(NewAffiliateLink {
        original_url: validate::link_url(url).map_err(CliError::Invalid)?,
        product_name: validate::product_name(product_name).map_err(CliError::Invalid)?,
        commission_rate: validate::commission_rate(commission_rate).map_err(CliError::Invalid)?,
        category: category.and_then(validate::optional),
        utm_source,
        utm_medium,
        utm_campaign,
    })
}

pub(crate) fn export_request(
    format: &str,
    data_type: &str,
    start_date: Option<String>,
    end_date: Option<String>,
) -> Result<ExportRequest, CliError> {
    let format = match format {
        "json" => ExportFormat::Json,
        "csv" => ExportFormat::Csv,
        _ => return Err(CliError::Invalid("Format must be json or csv.")),
    };
    let data_type = ExportDataType::parse(data_type)
        .ok_or(CliError::Invalid("Data type must be summary, tweets, campaigns or affiliate_links."))?;
    Ok(ExportRequest { format, data_type, start_date, end_date })
}
