//! Self-contained interactive HTML page for the report.
//!
//! Records are embedded as a JSON array; filtering, search and sorting run
//! in the browser. The script reads the `ReportRecord` field names directly.

use crate::domain::model::ReportRecord;
use crate::domain::team::Team;
use crate::utils::error::Result;
use chrono::NaiveDate;

const PLAYERS_SLOT: &str = "__PLAYERS_JSON__";
const TEAMS_SLOT: &str = "__TEAM_OPTIONS__";
const UPDATED_SLOT: &str = "__LAST_UPDATED__";

const TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>NBA Player FG% Stats</title>
    <style>
        * { margin: 0; padding: 0; box-sizing: border-box; }
        body {
            font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
            background: linear-gradient(135deg, #1e3c72 0%, #2a5298 100%);
            min-height: 100vh;
            padding: 20px;
        }
        .container {
            max-width: 1100px;
            margin: 0 auto;
            background: white;
            border-radius: 10px;
            box-shadow: 0 10px 40px rgba(0, 0, 0, 0.3);
            padding: 30px;
        }
        h1 { color: #1e3c72; margin-bottom: 8px; }
        .subtitle { color: #666; margin-bottom: 24px; }
        .controls { display: flex; flex-wrap: wrap; gap: 12px; align-items: center; margin-bottom: 20px; }
        select, input, button { padding: 8px 12px; border: 1px solid #ccc; border-radius: 5px; font-size: 14px; }
        button { background: #1e3c72; color: white; border: none; cursor: pointer; }
        button:hover { background: #2a5298; }
        .table-wrapper { overflow-x: auto; }
        table { width: 100%; border-collapse: collapse; }
        th { background: #1e3c72; color: white; padding: 10px; cursor: pointer; user-select: none; text-align: left; }
        td { padding: 9px 10px; border-bottom: 1px solid #eee; }
        tr:hover td { background: #f5f8ff; }
        .high-stat { color: #1a7f37; font-weight: 600; }
        .medium-stat { color: #9a6700; font-weight: 600; }
        .low-stat { color: #cf222e; font-weight: 600; }
        .stat-badge {
            display: inline-block;
            padding: 2px 8px;
            border-radius: 3px;
            font-size: 13px;
            font-weight: 600;
            background-color: #e7f3ff;
            color: #1e3c72;
        }
        .info { color: #666; margin-top: 16px; text-align: center; }
    </style>
</head>
<body>
    <div class="container">
        <h1>NBA Player Field Goal Percentage Stats</h1>
        <p class="subtitle">Interactive Filtering by Team | Last Updated: __LAST_UPDATED__</p>

        <div class="controls">
            <label for="teamFilter">Filter by Team:</label>
            <select id="teamFilter" onchange="filterTable()">
                <option value="">All Teams</option>
__TEAM_OPTIONS__
            </select>
            <input type="text" id="playerSearch" placeholder="Search player name..." onkeyup="filterTable()">
            <button onclick="resetFilters()">Reset Filters</button>
        </div>

        <div class="table-wrapper">
            <table id="statsTable">
                <thead>
                    <tr>
                        <th onclick="sortTable('rank')">Rank</th>
                        <th onclick="sortTable('name')">Player Name</th>
                        <th onclick="sortTable('team')">Team</th>
                        <th onclick="sortTable('fg_pct')">FG%</th>
                        <th onclick="sortTable('two_pct')">2P%</th>
                        <th onclick="sortTable('three_pct')">3P%</th>
                        <th onclick="sortTable('made2_likelihood_pct')">Made 2 Likelihood %</th>
                        <th onclick="sortTable('first_made_weighted')">First Made (Weighted)</th>
                        <th onclick="sortTable('team_rank')">Team Rank</th>
                    </tr>
                </thead>
                <tbody id="tableBody"></tbody>
            </table>
        </div>

        <div class="info" id="resultInfo"></div>
    </div>

    <script>
        const allPlayers = __PLAYERS_JSON__;
        let currentData = [...allPlayers];
        const sortAscending = {};

        function escapeHtml(value) {
            return String(value).replace(/[&<>"']/g, c => ({
                '&': '&amp;', '<': '&lt;', '>': '&gt;', '"': '&quot;', "'": '&#39;'
            }[c]));
        }

        function pct(value) {
            return (value * 100).toFixed(1) + '%';
        }

        function fgClass(value) {
            if (value >= 0.50) return 'high-stat';
            if (value < 0.40) return 'low-stat';
            return 'medium-stat';
        }

        function populateTable(data) {
            const tbody = document.getElementById('tableBody');
            tbody.innerHTML = '';

            if (data.length === 0) {
                tbody.innerHTML = '<tr><td colspan="9" class="info">No players found matching your filters.</td></tr>';
                document.getElementById('resultInfo').textContent = 'No results found.';
                return;
            }

            data.forEach(player => {
                const row = document.createElement('tr');
                const rank = player.rank === null ? 'N/A' : player.rank;
                row.innerHTML = `
                    <td><strong>${rank}</strong></td>
                    <td><strong>${escapeHtml(player.name)}</strong></td>
                    <td><span class="stat-badge">${player.team}</span></td>
                    <td class="${fgClass(player.fg_pct)}">${pct(player.fg_pct)}</td>
                    <td>${pct(player.two_pct)}</td>
                    <td>${pct(player.three_pct)}</td>
                    <td><strong>${player.made2_likelihood_pct.toFixed(1)}%</strong></td>
                    <td><strong>${escapeHtml(player.first_made_weighted)}</strong></td>
                    <td>${player.team_rank} / ${player.team_total_players}</td>
                `;
                tbody.appendChild(row);
            });

            document.getElementById('resultInfo').textContent =
                `Showing ${data.length} of ${allPlayers.length} players`;
        }

        function filterTable() {
            const team = document.getElementById('teamFilter').value;
            const search = document.getElementById('playerSearch').value.toLowerCase();

            currentData = allPlayers.filter(player =>
                (team === '' || player.team === team) &&
                player.name.toLowerCase().includes(search));

            if (team !== '') {
                currentData.sort((a, b) => a.team_rank - b.team_rank);
            }
            populateTable(currentData);
        }

        function resetFilters() {
            document.getElementById('teamFilter').value = '';
            document.getElementById('playerSearch').value = '';
            currentData = [...allPlayers];
            populateTable(currentData);
        }

        function sortTable(key) {
            const ascending = sortAscending[key] || false;
            currentData.sort((a, b) => {
                const aVal = a[key];
                const bVal = b[key];
                if (aVal === null) return 1;
                if (bVal === null) return -1;
                if (typeof aVal === 'number') {
                    return ascending ? aVal - bVal : bVal - aVal;
                }
                const comparison = String(aVal).localeCompare(String(bVal));
                return ascending ? comparison : -comparison;
            });
            sortAscending[key] = !ascending;
            populateTable(currentData);
        }

        window.onload = () => populateTable(allPlayers);
    </script>
</body>
</html>
"##;

fn team_options() -> String {
    Team::ALL
        .iter()
        .map(|team| format!("                <option value=\"{0}\">{0}</option>", team))
        .collect::<Vec<_>>()
        .join("\n")
}

/// JSON safe to inline in a `<script>` element.
fn script_json(records: &[ReportRecord]) -> Result<String> {
    Ok(serde_json::to_string(records)?.replace("</", "<\\/"))
}

pub fn render_report(records: &[ReportRecord], generated_on: NaiveDate) -> Result<String> {
    let players = script_json(records)?;
    Ok(TEMPLATE
        .replace(UPDATED_SLOT, &generated_on.format("%B %d, %Y").to_string())
        .replace(TEAMS_SLOT, &team_options())
        .replace(PLAYERS_SLOT, &players))
}
