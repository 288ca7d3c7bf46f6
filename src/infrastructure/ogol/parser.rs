// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::edition::{EditionId, PhaseId};
use crate::domain::models::fixture::Match;
use crate::utils::html::{Document, Node};
use tracing::trace;

/// Year dropdown on the competition search page.
const EDITION_SELECT_ID: &str = "id_edicao";
/// Standings container on the edition page.
const STANDINGS_ID: &str = "edition_table";
/// Hidden input holding the phase on the edition page.
const PHASE_INPUT_NAME: &str = "fase";
/// Fixtures container on the results page.
const FIXTURES_ID: &str = "fixture_games";
const FIXTURES_TABLE_CLASSES: &str = "zztable stats";

/// 结果表中一行比赛至少需要的单元格数：日期、主队、-、比分、-、客队
const MIN_MATCH_CELLS: usize = 6;
const CHAMPION_CELL: usize = 2;

/// 从搜索页的年份下拉框中找出 `year` 对应的赛季标识
///
/// 只接受去除空白后与 `year` 完全相同的选项文本
pub fn parse_edition_id(html: &str, year: &str) -> Option<EditionId> {
    let document = Document::parse(html);
    let select = document.find_by_id("select", EDITION_SELECT_ID)?;

    select
        .find_all("option")
        .into_iter()
        .filter(|option| option.text() == year)
        .find_map(|option| option.attr("value"))
        .map(EditionId::new)
}

/// 从赛季页积分榜第一行第三列读取冠军名称
pub fn parse_champion(html: &str) -> Option<String> {
    let document = Document::parse(html);
    let standings = document.find_by_id("div", STANDINGS_ID)?;
    let first_row = standings.find("tbody")?.find("tr")?;
    let cells = first_row.find_all("td");
    let name = cells.get(CHAMPION_CELL)?.find("a")?.text();

    (!name.is_empty()).then_some(name)
}

/// 读取赛季页隐藏字段 `fase` 的值
pub fn parse_phase_id(html: &str) -> Option<PhaseId> {
    let document = Document::parse(html);
    document
        .find_by_attr("input", "name", PHASE_INPUT_NAME)?
        .attr("value")
        .map(PhaseId::new)
}

/// 解析轮次结果表
///
/// 表中同一天的比赛只在第一行写日期，后续行沿用最近一次出现的日期。
/// 无法解析的行直接跳过，不影响其余行。
///
/// # 返回值
///
/// 按表格顺序排列的比赛；找不到表格或一场比赛都没有时返回 `None`
pub fn parse_matches(html: &str) -> Option<Vec<Match>> {
    let document = Document::parse(html);
    let table = document
        .find_by_id("div", FIXTURES_ID)?
        .find_by_class("table", FIXTURES_TABLE_CLASSES)?;

    let mut carried_date: Option<String> = None;
    let matches: Vec<Match> = table
        .find_all("tr")
        .iter()
        .filter_map(|row| parse_match_row(row, &mut carried_date))
        .collect();

    (!matches.is_empty()).then_some(matches)
}

fn parse_match_row(row: &Node<'_>, carried_date: &mut Option<String>) -> Option<Match> {
    let cells = row.find_all("td");
    if cells.len() < MIN_MATCH_CELLS {
        return None;
    }

    let date = cells[0].text();
    if !date.is_empty() {
        *carried_date = Some(date);
    }
    let Some(date) = carried_date.clone() else {
        trace!("Skipping row before any dated row");
        return None;
    };

    let home_team = linked_text(&cells[1])?;
    let score = linked_text(&cells[3])?;
    let away_team = linked_text(&cells[5])?;

    let Some((home_goals, away_goals)) = parse_score(&score) else {
        trace!(score = %score, "Skipping row without a final score");
        return None;
    };

    Some(Match::new(date, home_team, away_team, home_goals, away_goals))
}

/// Trimmed text of the link inside a cell, if it is non-empty.
fn linked_text(cell: &Node<'_>) -> Option<String> {
    let text = cell.find("a")?.text();
    (!text.is_empty()).then_some(text)
}

/// 将 `"3-1"` 形式的比分拆成主客队进球数
pub fn parse_score(score: &str) -> Option<(u32, u32)> {
    let (home, away) = score.split_once('-')?;
    let home = home.trim().parse().ok()?;
    let away = away.trim().parse().ok()?;
    Some((home, away))
}

#[cfg(test)]
#[path = "parser_test.rs"]
mod tests;
