//! The SmartFin side menu

use super::node::{Icon, MenuNode};
use super::tree::MenuTree;
use crate::error::MenuError;

pub const DASHBOARD: &str = "1";
pub const TRADE_CENTER: &str = "2";
pub const ASSET_ANALYSIS: &str = "sub1";
pub const HOLDINGS: &str = "3";
pub const TRANSACTIONS: &str = "4";
pub const AI_RESEARCH: &str = "9";

pub fn declaration() -> Vec<MenuNode> {
    vec![
        MenuNode::item(DASHBOARD, "Dashboard", "/").with_icon(Icon::PieChart),
        MenuNode::item(TRADE_CENTER, "交易中心", "/trade").with_icon(Icon::Desktop),
        MenuNode::group(
            ASSET_ANALYSIS,
            "资产分析",
            [
                MenuNode::item(HOLDINGS, "持仓概览", "/assets"),
                MenuNode::item(TRANSACTIONS, "流水明细", "/transactions"),
            ],
        )
        .with_icon(Icon::User),
        MenuNode::item(AI_RESEARCH, "AI 投研", "/ai-research").with_icon(Icon::File),
    ]
}

pub fn smartfin_menu() -> Result<MenuTree, MenuError> {
    MenuTree::new(declaration())
}
