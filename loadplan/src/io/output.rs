use matryoshka::io::ext_repr::ExtOrder;
use serde::{Deserialize, Serialize};

use crate::config::LPConfig;
use crate::planner::LoadingPlan;

#[derive(Serialize, Deserialize, Clone)]
pub struct PlanOutput {
    #[serde(flatten)]
    pub order: ExtOrder,
    pub plan: LoadingPlan,
    pub config: LPConfig,
}
