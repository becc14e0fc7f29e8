//! Data Transfer Objects for API requests and responses

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use venture_core::{Investment, Payout, Startup, Team, TeamStanding, User};
use venture_ledger::{InvestmentDetail, PlacedInvestment, ResolutionRecord, StartupDetail, TeamDetail};

// ============ Account DTOs ============

/// Register request
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub team_name: String,
}

/// Login request
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login response: the bearer token plus the authenticated user
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserResponse,
}

/// Plain message response
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// User response (credential hash never leaves the ledger)
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub team_id: Option<String>,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.as_str().to_string(),
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role.as_str().to_string(),
            team_id: user.team_id.as_ref().map(|id| id.as_str().to_string()),
        }
    }
}

// ============ Team DTOs ============

/// Team response
#[derive(Debug, Serialize)]
pub struct TeamResponse {
    pub id: String,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub balance: Decimal,
    pub created_at: DateTime<Utc>,
}

impl From<&Team> for TeamResponse {
    fn from(team: &Team) -> Self {
        Self {
            id: team.id.as_str().to_string(),
            name: team.name.clone(),
            balance: team.balance,
            created_at: team.created_at,
        }
    }
}

/// Team snapshot with investment history
#[derive(Debug, Serialize)]
pub struct TeamSnapshotResponse {
    pub team: TeamResponse,
    pub investments: Vec<InvestmentResponse>,
}

/// Leaderboard entry
#[derive(Debug, Serialize)]
pub struct TeamStandingResponse {
    pub id: String,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub balance: Decimal,
    pub member_count: u64,
    pub investment_count: u64,
}

impl From<&TeamStanding> for TeamStandingResponse {
    fn from(standing: &TeamStanding) -> Self {
        Self {
            id: standing.id.as_str().to_string(),
            name: standing.name.clone(),
            balance: standing.balance,
            member_count: standing.member_count,
            investment_count: standing.investment_count,
        }
    }
}

/// Leaderboard response
#[derive(Debug, Serialize)]
pub struct LeaderboardResponse {
    pub teams: Vec<TeamStandingResponse>,
}

/// Admin team listing entry
#[derive(Debug, Serialize)]
pub struct TeamDetailResponse {
    pub team: TeamResponse,
    pub users: Vec<UserResponse>,
    pub investments: Vec<InvestmentResponse>,
}

impl From<&TeamDetail> for TeamDetailResponse {
    fn from(detail: &TeamDetail) -> Self {
        Self {
            team: TeamResponse::from(&detail.team),
            users: detail.users.iter().map(UserResponse::from).collect(),
            investments: detail
                .investments
                .iter()
                .map(InvestmentResponse::from)
                .collect(),
        }
    }
}

/// Admin team listing response
#[derive(Debug, Serialize)]
pub struct TeamsResponse {
    pub teams: Vec<TeamDetailResponse>,
}

// ============ Startup DTOs ============

/// Create startup request
#[derive(Debug, Deserialize)]
pub struct CreateStartupRequest {
    pub name: String,
    pub description: String,
    pub pitch: String,
    /// Optional payout multiplier; the game default applies when
    /// omitted
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub multiplier: Option<Decimal>,
}

/// Resolve outcome request
#[derive(Debug, Deserialize)]
pub struct ResolveOutcomeRequest {
    /// Target outcome (SUCCESS, FAILURE)
    pub outcome: String,
}

/// Update multiplier request
#[derive(Debug, Deserialize)]
pub struct UpdateMultiplierRequest {
    #[serde(with = "rust_decimal::serde::float")]
    pub multiplier: Decimal,
}

/// Startup response
#[derive(Debug, Serialize)]
pub struct StartupResponse {
    pub id: String,
    pub name: String,
    pub description: String,
    pub pitch: String,
    pub outcome: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub multiplier: Decimal,
    pub created_at: DateTime<Utc>,
}

impl From<&Startup> for StartupResponse {
    fn from(startup: &Startup) -> Self {
        Self {
            id: startup.id.as_str().to_string(),
            name: startup.name.clone(),
            description: startup.description.clone(),
            pitch: startup.pitch.clone(),
            outcome: startup.outcome.as_str().to_string(),
            multiplier: startup.multiplier,
            created_at: startup.created_at,
        }
    }
}

/// Single startup response wrapper
#[derive(Debug, Serialize)]
pub struct StartupEnvelope {
    pub startup: StartupResponse,
}

/// Startup listing response
#[derive(Debug, Serialize)]
pub struct StartupsResponse {
    pub startups: Vec<StartupResponse>,
}

/// Admin startup listing entry with its investments
#[derive(Debug, Serialize)]
pub struct StartupDetailResponse {
    pub startup: StartupResponse,
    pub investments: Vec<InvestmentSummaryResponse>,
}

impl From<&StartupDetail> for StartupDetailResponse {
    fn from(detail: &StartupDetail) -> Self {
        Self {
            startup: StartupResponse::from(&detail.startup),
            investments: detail
                .investments
                .iter()
                .map(InvestmentSummaryResponse::from)
                .collect(),
        }
    }
}

/// Admin startup listing response
#[derive(Debug, Serialize)]
pub struct StartupDetailsResponse {
    pub startups: Vec<StartupDetailResponse>,
}

// ============ Investment DTOs ============

/// Place investment request
#[derive(Debug, Deserialize)]
pub struct PlaceInvestmentRequest {
    pub startup_id: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
}

/// Investment with its startup snapshot
#[derive(Debug, Serialize)]
pub struct InvestmentResponse {
    pub id: String,
    pub team_id: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub created_at: DateTime<Utc>,
    pub startup: StartupResponse,
}

impl From<&InvestmentDetail> for InvestmentResponse {
    fn from(detail: &InvestmentDetail) -> Self {
        Self {
            id: detail.investment.id.as_str().to_string(),
            team_id: detail.investment.team_id.as_str().to_string(),
            amount: detail.investment.amount,
            created_at: detail.investment.created_at,
            startup: StartupResponse::from(&detail.startup),
        }
    }
}

/// Bare investment row, used inside admin startup listings where the
/// startup is already the envelope
#[derive(Debug, Serialize)]
pub struct InvestmentSummaryResponse {
    pub id: String,
    pub team_id: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub created_at: DateTime<Utc>,
}

impl From<&Investment> for InvestmentSummaryResponse {
    fn from(investment: &Investment) -> Self {
        Self {
            id: investment.id.as_str().to_string(),
            team_id: investment.team_id.as_str().to_string(),
            amount: investment.amount,
            created_at: investment.created_at,
        }
    }
}

/// Place investment response: the created row and the debited team
#[derive(Debug, Serialize)]
pub struct PlaceInvestmentResponse {
    pub investment: InvestmentResponse,
    pub team: TeamResponse,
}

impl From<&PlacedInvestment> for PlaceInvestmentResponse {
    fn from(placed: &PlacedInvestment) -> Self {
        Self {
            investment: InvestmentResponse {
                id: placed.investment.id.as_str().to_string(),
                team_id: placed.investment.team_id.as_str().to_string(),
                amount: placed.investment.amount,
                created_at: placed.investment.created_at,
                startup: StartupResponse::from(&placed.startup),
            },
            team: TeamResponse::from(&placed.team),
        }
    }
}

// ============ Resolution DTOs ============

/// One team's payout
#[derive(Debug, Serialize)]
pub struct PayoutResponse {
    pub team_id: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
}

impl From<&Payout> for PayoutResponse {
    fn from(payout: &Payout) -> Self {
        Self {
            team_id: payout.team_id.as_str().to_string(),
            amount: payout.amount,
        }
    }
}

/// Resolution response: the resolved startup and the payouts applied
/// (empty for FAILURE)
#[derive(Debug, Serialize)]
pub struct ResolveOutcomeResponse {
    pub startup: StartupResponse,
    pub payouts: Vec<PayoutResponse>,
}

impl From<&ResolutionRecord> for ResolveOutcomeResponse {
    fn from(record: &ResolutionRecord) -> Self {
        Self {
            startup: StartupResponse::from(&record.startup),
            payouts: record.payouts.iter().map(PayoutResponse::from).collect(),
        }
    }
}

// ============ Health DTOs ============

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}
