//! Maps user tokens to analytics and renders their results.

use roster_analytics::{
    average_cost, best_cost_benefit, cost_extremes, department_costs, efficiency_ranking,
    project_savings,
};
use roster_model::RosterSnapshot;

/// Token that reveals the hidden message.
pub const DIAGNOSTIC_CODE: &str = "99";

const HIDDEN_MESSAGE_HEX: &str =
    "6f207365677265646f20657374c3a1206e6f732070657175656e6f7320646574616c6865732e2e2e";

pub const FAREWELL_MESSAGE: &str = "Leaving already? Hope I helped, see you next time!";

pub const INVALID_OPTION_MESSAGE: &str = "Invalid option or unrecognized command. \
     Please choose a valid menu option (0-6) or the command '99'.";

/// The six analytics reachable from the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Analytic {
    DepartmentCosts,
    AverageCost,
    CostExtremes,
    EfficiencyRanking,
    BestCostBenefit,
    SavingsProjection,
}

impl Analytic {
    pub const ALL: [Analytic; 6] = [
        Analytic::DepartmentCosts,
        Analytic::AverageCost,
        Analytic::CostExtremes,
        Analytic::EfficiencyRanking,
        Analytic::BestCostBenefit,
        Analytic::SavingsProjection,
    ];

    /// Menu number of this entry.
    pub const fn number(self) -> u8 {
        match self {
            Analytic::DepartmentCosts => 1,
            Analytic::AverageCost => 2,
            Analytic::CostExtremes => 3,
            Analytic::EfficiencyRanking => 4,
            Analytic::BestCostBenefit => 5,
            Analytic::SavingsProjection => 6,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Analytic::DepartmentCosts => "Total cost by department",
            Analytic::AverageCost => "Average cost per active employee",
            Analytic::CostExtremes => "Most and least costly department",
            Analytic::EfficiencyRanking => "Efficiency by experience year",
            Analytic::BestCostBenefit => "Best cost-benefit",
            Analytic::SavingsProjection => "Savings projection",
        }
    }

    /// Extra keywords accepted besides the number and the label.
    const fn synonyms(self) -> &'static [&'static str] {
        match self {
            Analytic::DepartmentCosts => &["department costs"],
            Analytic::AverageCost => &["average cost"],
            Analytic::CostExtremes => &["most and least costly"],
            Analytic::EfficiencyRanking => &["efficiency"],
            Analytic::BestCostBenefit => &["best value"],
            Analytic::SavingsProjection => &["costs", "savings"],
        }
    }

    fn matches(self, token: &str) -> bool {
        token == self.number().to_string()
            || token == self.label().to_lowercase()
            || self.synonyms().iter().any(|synonym| *synonym == token)
    }

    /// Runs the analytic against `snapshot` and renders the result.
    pub fn run(self, snapshot: &RosterSnapshot, optimize_count: usize) -> String {
        match self {
            Analytic::DepartmentCosts => department_costs(snapshot).to_string(),
            Analytic::AverageCost => average_cost(snapshot).to_string(),
            Analytic::CostExtremes => cost_extremes(snapshot).to_string(),
            Analytic::EfficiencyRanking => efficiency_ranking(snapshot).to_string(),
            Analytic::BestCostBenefit => best_cost_benefit(snapshot).to_string(),
            Analytic::SavingsProjection => project_savings(snapshot, optimize_count).to_string(),
        }
    }
}

/// One parsed menu token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Exit,
    Diagnostic,
    Analytic(Analytic),
    Invalid(String),
}

impl Command {
    /// Parses a number or keyword, ignoring case and surrounding whitespace.
    pub fn parse(input: &str) -> Self {
        let token = input.trim().to_lowercase();
        match token.as_str() {
            "0" | "exit" | "quit" => Command::Exit,
            DIAGNOSTIC_CODE => Command::Diagnostic,
            other => Analytic::ALL
                .into_iter()
                .find(|analytic| analytic.matches(other))
                .map_or_else(|| Command::Invalid(input.trim().to_string()), Command::Analytic),
        }
    }

    pub fn needs_roster(&self) -> bool {
        matches!(self, Command::Analytic(_))
    }
}

/// Decodes the hidden message behind [`DIAGNOSTIC_CODE`].
pub fn hidden_message() -> String {
    let decoded = hex::decode(HIDDEN_MESSAGE_HEX)
        .ok()
        .and_then(|bytes| String::from_utf8(bytes).ok());
    debug_assert!(
        decoded.is_some(),
        "HIDDEN_MESSAGE_HEX must be hex-encoded UTF-8"
    );
    decoded.unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_and_keywords_parse() {
        assert_eq!(Command::parse("0"), Command::Exit);
        assert_eq!(Command::parse(" EXIT "), Command::Exit);
        assert_eq!(Command::parse("99"), Command::Diagnostic);
        for analytic in Analytic::ALL {
            assert_eq!(
                Command::parse(&analytic.number().to_string()),
                Command::Analytic(analytic)
            );
            assert_eq!(
                Command::parse(&analytic.label().to_uppercase()),
                Command::Analytic(analytic)
            );
        }
        assert_eq!(
            Command::parse("Costs"),
            Command::Analytic(Analytic::SavingsProjection)
        );
    }

    #[test]
    fn unknown_tokens_are_invalid() {
        assert_eq!(Command::parse(" 7 "), Command::Invalid("7".to_string()));
        assert_eq!(Command::parse(""), Command::Invalid(String::new()));
        assert!(!Command::parse("98").needs_roster());
    }

    #[test]
    fn hidden_message_decodes() {
        assert_eq!(hidden_message(), "o segredo está nos pequenos detalhes...");
    }
}
