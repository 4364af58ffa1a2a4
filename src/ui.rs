pub const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Submission Insights</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #f8f3e6;
      --bg-2: #f5d3a7;
      --ink: #2b2a28;
      --muted: #5f5c57;
      --accent: #ff6b4a;
      --accent-2: #2f4858;
      --card: rgba(255, 255, 255, 0.86);
      --row-border: rgba(47, 72, 88, 0.08);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.18);
      --pill-alpha-bg: 0.12;
      --pill-alpha-border: 0.25;
      --strength: #15803d;
      --weakness: #b91c1c;
    }

    :root[data-theme="dark"] {
      --bg-1: #101418;
      --bg-2: #1d2733;
      --ink: #e7e3da;
      --muted: #9aa4ae;
      --accent: #ff8a6b;
      --accent-2: #9fc1d9;
      --card: rgba(22, 28, 35, 0.92);
      --row-border: rgba(159, 193, 217, 0.14);
      --shadow: 0 24px 60px rgba(0, 0, 0, 0.5);
      --pill-alpha-bg: 0.22;
      --pill-alpha-border: 0.35;
      --strength: #4ade80;
      --weakness: #f87171;
    }

    @media (prefers-color-scheme: dark) {
      :root:not([data-theme="light"]) {
        --bg-1: #101418;
        --bg-2: #1d2733;
        --ink: #e7e3da;
        --muted: #9aa4ae;
        --accent: #ff8a6b;
        --accent-2: #9fc1d9;
        --card: rgba(22, 28, 35, 0.92);
        --row-border: rgba(159, 193, 217, 0.14);
        --shadow: 0 24px 60px rgba(0, 0, 0, 0.5);
        --pill-alpha-bg: 0.22;
        --pill-alpha-border: 0.35;
        --strength: #4ade80;
        --weakness: #f87171;
      }
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), var(--bg-1) 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: start center;
      padding: 32px 18px 48px;
      transition: background 250ms ease, color 250ms ease;
    }

    .app {
      width: min(980px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 28px;
      animation: rise 600ms ease;
    }

    header {
      display: flex;
      flex-wrap: wrap;
      align-items: center;
      justify-content: space-between;
      gap: 16px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(1.8rem, 4vw, 2.6rem);
      margin: 0;
    }

    .subtitle {
      margin: 4px 0 0;
      color: var(--muted);
      font-size: 1rem;
    }

    .theme-toggle {
      appearance: none;
      border: 1px solid var(--row-border);
      border-radius: 999px;
      padding: 8px 16px;
      font-size: 0.9rem;
      font-weight: 600;
      cursor: pointer;
      background: var(--card);
      color: var(--ink);
      display: inline-flex;
      align-items: center;
      gap: 8px;
    }

    .theme-toggle-dot {
      width: 10px;
      height: 10px;
      border-radius: 50%;
      background: rgba(253, 181, 21, 0.95);
    }

    .banner {
      display: grid;
      place-items: center;
    }

    .banner img {
      width: 100%;
      max-height: 120px;
      object-fit: cover;
      border-radius: 18px;
      transition: opacity 300ms ease;
    }

    .panel {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(160px, 1fr));
      gap: 16px;
    }

    .stat {
      background: var(--card);
      border-radius: 18px;
      padding: 18px;
      border: 1px solid var(--row-border);
      display: grid;
      gap: 8px;
    }

    .stat .label {
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: var(--muted);
    }

    .stat .value {
      font-size: 1.7rem;
      font-weight: 600;
      color: var(--accent-2);
    }

    section h2 {
      margin: 0 0 12px;
      font-size: 1.4rem;
    }

    table {
      width: 100%;
      border-collapse: collapse;
      font-size: 0.95rem;
    }

    th, td {
      text-align: left;
      padding: 10px 12px;
      border-bottom: 1px solid var(--row-border);
      vertical-align: top;
    }

    th {
      font-size: 0.8rem;
      text-transform: uppercase;
      letter-spacing: 0.1em;
      color: var(--muted);
    }

    .pill {
      display: inline-block;
      border: 1px solid transparent;
      border-radius: 999px;
      padding: 2px 10px;
      margin: 2px 4px 2px 0;
      font-size: 0.85rem;
      font-weight: 600;
    }

    .theme-lists {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
      gap: 20px;
    }

    .theme-lists ul {
      margin: 0;
      padding-left: 20px;
      display: grid;
      gap: 8px;
    }

    .theme-lists h3 {
      margin: 0 0 10px;
      font-size: 1.05rem;
    }

    .theme-lists .strengths h3 { color: var(--strength); }
    .theme-lists .weaknesses h3 { color: var(--weakness); }

    .theme-meta {
      color: var(--muted);
      font-size: 0.9rem;
    }

    .card-grid {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
      gap: 16px;
    }

    .model-card {
      background: var(--card);
      border: 1px solid var(--row-border);
      border-radius: 18px;
      padding: 16px;
      display: grid;
      gap: 10px;
    }

    .model-card h4 {
      margin: 0;
      font-size: 1.05rem;
      display: flex;
      align-items: center;
      gap: 8px;
      flex-wrap: wrap;
    }

    .model-card .count {
      border-radius: 999px;
      padding: 2px 10px;
      font-size: 0.8rem;
      font-weight: 600;
    }

    .model-card strong.kind-strength { color: var(--strength); }
    .model-card strong.kind-weakness { color: var(--weakness); }

    @keyframes rise {
      from {
        opacity: 0;
        transform: translateY(18px);
      }
      to {
        opacity: 1;
        transform: translateY(0);
      }
    }

    @media (prefers-reduced-motion: reduce) {
      body, .banner img {
        transition: none;
      }
      .app {
        animation: none;
      }
    }

    @media (max-width: 600px) {
      .app {
        padding: 28px 22px;
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <div>
        <h1>Submission Insights</h1>
        <p class="subtitle">Homework writeup breakdowns and recurring themes, per model.</p>
      </div>
      <button class="theme-toggle" type="button" data-theme-toggle aria-pressed="false" aria-label="Switch to Dark mode">
        <span class="theme-toggle-dot"></span>
        <span data-theme-toggle-text>Light</span>
      </button>
    </header>

    <div class="banner">
      <img id="banner"
        alt="Decorative banner"
        data-theme-src-light="data:image/svg+xml;utf8,%3Csvg xmlns='http://www.w3.org/2000/svg' width='960' height='120'%3E%3Crect width='960' height='120' fill='rgb(245,211,167)'/%3E%3Ccircle cx='120' cy='60' r='36' fill='rgb(255,107,74)'/%3E%3C/svg%3E"
        data-theme-src-dark="data:image/svg+xml;utf8,%3Csvg xmlns='http://www.w3.org/2000/svg' width='960' height='120'%3E%3Crect width='960' height='120' fill='rgb(29,39,51)'/%3E%3Ccircle cx='120' cy='60' r='36' fill='rgb(159,193,217)'/%3E%3C/svg%3E"
        src="data:image/svg+xml;utf8,%3Csvg xmlns='http://www.w3.org/2000/svg' width='960' height='120'%3E%3Crect width='960' height='120' fill='rgb(245,211,167)'/%3E%3Ccircle cx='120' cy='60' r='36' fill='rgb(255,107,74)'/%3E%3C/svg%3E" />
    </div>

    <section class="panel">
      <div class="stat">
        <span class="label">Submissions</span>
        <span id="stat-submissions" class="value">--</span>
      </div>
      <div class="stat">
        <span class="label">Authors</span>
        <span id="stat-authors" class="value">--</span>
      </div>
      <div class="stat">
        <span class="label">Models</span>
        <span id="stat-models" class="value">--</span>
      </div>
      <div class="stat">
        <span class="label">Providers</span>
        <span id="stat-providers" class="value">--</span>
      </div>
    </section>

    <section>
      <h2>Homework Submission Breakdown</h2>
      <table>
        <thead>
          <tr><th>Homework</th><th>Submissions</th><th>Top models</th></tr>
        </thead>
        <tbody id="hw-breakdown-body"></tbody>
      </table>
    </section>

    <section>
      <h2>Provider Market Share</h2>
      <table>
        <thead>
          <tr><th>Provider</th><th>Submissions</th><th>Share</th><th>Models</th></tr>
        </thead>
        <tbody id="provider-breakdown-body"></tbody>
      </table>
    </section>

    <section>
      <h2>Common Themes</h2>
      <div class="theme-lists">
        <div class="strengths">
          <h3>Strengths</h3>
          <ul id="common-strengths"></ul>
        </div>
        <div class="weaknesses">
          <h3>Weaknesses</h3>
          <ul id="common-weaknesses"></ul>
        </div>
      </div>
      <p class="theme-meta">Keyword heuristics over self-reported writeups; ambiguous phrasing can miscount.</p>
    </section>

    <section>
      <h2>Model Performance Analysis</h2>
      <div class="card-grid" id="model-analysis-grid"></div>
    </section>
  </main>

  <script>
    const THEME_DARK = 'dark';
    const THEME_LIGHT = 'light';
    const SWAP_TIMEOUT_MS = 900;

    const media = window.matchMedia('(prefers-color-scheme: dark)');
    const reducedMotion = window.matchMedia('(prefers-reduced-motion: reduce)');

    let insightsData = null;
    let currentEffective = media.matches ? THEME_DARK : THEME_LIGHT;
    let latestSwapToken = 0;

    function systemTheme() {
      return media.matches ? THEME_DARK : THEME_LIGHT;
    }

    async function themeApi(path, method) {
      const options = { method };
      if (method === 'POST') {
        options.headers = { 'content-type': 'application/json' };
        options.body = JSON.stringify({ system: systemTheme() });
      }
      const url = method === 'POST' ? path : `${path}?system=${systemTheme()}`;
      const res = await fetch(url, options);
      if (!res.ok) {
        throw new Error('theme request failed');
      }
      return res.json();
    }

    function applyThemeState(state) {
      currentEffective = state.effective;
      latestSwapToken = state.swap_token;

      if (state.preference) {
        document.documentElement.dataset.theme = state.preference;
      } else {
        document.documentElement.removeAttribute('data-theme');
      }

      syncToggleUi();
      swapBannerImage(state.swap_token);
      document.dispatchEvent(new CustomEvent('themechange', {
        detail: { theme: state.effective, isDark: state.effective === THEME_DARK }
      }));
    }

    function syncToggleUi() {
      const isDark = currentEffective === THEME_DARK;
      const nextLabel = isDark ? 'Light' : 'Dark';

      document.querySelectorAll('[data-theme-toggle]').forEach((btn) => {
        btn.setAttribute('aria-pressed', String(isDark));
        btn.setAttribute('aria-label', `Switch to ${nextLabel} mode`);

        const textEl = btn.querySelector('[data-theme-toggle-text]');
        if (textEl) textEl.textContent = isDark ? 'Dark' : 'Light';

        const dot = btn.querySelector('.theme-toggle-dot');
        if (dot) {
          dot.style.background = isDark ? 'rgba(96, 165, 250, 0.9)' : 'rgba(253, 181, 21, 0.95)';
        }
      });
    }

    // Cross-fades every themed image to the source for the current theme.
    // A swap started under an older token is stale: its load/timeout
    // callback is a no-op once a newer toggle supersedes it.
    function swapBannerImage(token) {
      document.querySelectorAll('img[data-theme-src-light][data-theme-src-dark]').forEach((img) => {
        const desired = currentEffective === THEME_DARK
          ? img.getAttribute('data-theme-src-dark')
          : img.getAttribute('data-theme-src-light');
        if (!desired || img.getAttribute('src') === desired) return;

        if (reducedMotion.matches) {
          img.setAttribute('src', desired);
          return;
        }

        let completed = false;
        const complete = () => {
          if (completed || token !== latestSwapToken) return;
          completed = true;
          img.setAttribute('src', desired);
          img.style.opacity = '1';
        };

        img.style.opacity = '0';
        const preload = new Image();
        preload.addEventListener('load', complete);
        preload.src = desired;
        // Force-complete so a missing load event cannot leave the image
        // stuck invisible.
        setTimeout(complete, SWAP_TIMEOUT_MS);
      });
    }

    function isDarkMode() {
      return currentEffective === THEME_DARK;
    }

    function readCssNumber(name, fallback) {
      const raw = getComputedStyle(document.documentElement).getPropertyValue(name);
      const value = Number.parseFloat(String(raw).trim());
      return Number.isFinite(value) ? value : fallback;
    }

    function applyRgbToPill(el, rgb) {
      const parts = String(rgb || '').trim().split(/\s+/).map((n) => Number.parseInt(n, 10));
      if (parts.length !== 3 || parts.some((n) => !Number.isFinite(n))) return;

      const dark = isDarkMode();
      const [r, g, b] = parts;
      const bgAlpha = readCssNumber('--pill-alpha-bg', dark ? 0.22 : 0.12);
      const borderAlpha = readCssNumber('--pill-alpha-border', dark ? 0.35 : 0.25);

      el.style.backgroundColor = `rgba(${r}, ${g}, ${b}, ${bgAlpha})`;
      el.style.borderColor = `rgba(${r}, ${g}, ${b}, ${borderAlpha})`;
      el.style.color = dark ? `rgb(${r}, ${g}, ${b})` : '#0f172a';
    }

    function applyPillColors() {
      document.querySelectorAll('.pill[data-rgb]').forEach((el) => {
        applyRgbToPill(el, el.dataset.rgb);
      });
      document.querySelectorAll('.count[data-rgb]').forEach((el) => {
        const parts = String(el.dataset.rgb).trim().split(/\s+/);
        el.style.background = `rgb(${parts.join(', ')})`;
        el.style.color = el.dataset.textColor || '#ffffff';
      });
    }

    function pill(text, rgb) {
      const span = document.createElement('span');
      span.className = 'pill';
      span.textContent = text;
      if (rgb) span.dataset.rgb = rgb;
      return span;
    }

    function setText(id, value) {
      const el = document.getElementById(id);
      if (el) el.textContent = String(value);
    }

    function renderSummary(summary) {
      if (!summary.available) {
        ['stat-submissions', 'stat-authors', 'stat-models', 'stat-providers']
          .forEach((id) => setText(id, '--'));
        return;
      }
      setText('stat-submissions', summary.submissions);
      setText('stat-authors', summary.authors);
      setText('stat-models', summary.models);
      setText('stat-providers', summary.providers);
    }

    function renderHomework(rows) {
      const tbody = document.getElementById('hw-breakdown-body');
      tbody.innerHTML = '';

      rows.forEach((row) => {
        const tr = document.createElement('tr');

        const hwCell = document.createElement('td');
        const strong = document.createElement('strong');
        strong.textContent = row.homework;
        hwCell.appendChild(strong);

        const countCell = document.createElement('td');
        countCell.textContent = String(row.count);

        const topCell = document.createElement('td');
        row.top_models.forEach((entry) => {
          topCell.appendChild(pill(`${entry.model} (${entry.count})`, entry.rgb));
        });

        tr.appendChild(hwCell);
        tr.appendChild(countCell);
        tr.appendChild(topCell);
        tbody.appendChild(tr);
      });
    }

    function renderProviders(rows) {
      const tbody = document.getElementById('provider-breakdown-body');
      tbody.innerHTML = '';

      rows.forEach((row) => {
        const tr = document.createElement('tr');

        const providerCell = document.createElement('td');
        providerCell.appendChild(pill(row.provider, row.rgb));

        const countCell = document.createElement('td');
        countCell.textContent = String(row.count);

        const shareCell = document.createElement('td');
        shareCell.textContent = `${row.share.toFixed(1)}%`;

        const modelsCell = document.createElement('td');
        modelsCell.textContent = row.models
          .map((entry) => `${entry.model} (${entry.count})`)
          .join(', ');

        tr.appendChild(providerCell);
        tr.appendChild(countCell);
        tr.appendChild(shareCell);
        tr.appendChild(modelsCell);
        tbody.appendChild(tr);
      });
    }

    function renderThemeList(elementId, rows, totalModels) {
      const list = document.getElementById(elementId);
      list.innerHTML = '';

      rows.forEach((row) => {
        const li = document.createElement('li');
        const strong = document.createElement('strong');
        strong.textContent = row.label;
        li.appendChild(strong);
        li.appendChild(document.createTextNode(
          ` — ${row.count} submissions (${row.share.toFixed(0)}%), ${row.model_coverage}/${totalModels} models`
        ));
        list.appendChild(li);
      });
    }

    function appendBadges(container, badges, kind) {
      const label = document.createElement('strong');
      label.className = `kind-${kind}`;
      label.textContent = kind === 'strength' ? 'Strengths: ' : 'Weaknesses: ';
      container.appendChild(label);

      if (!badges.length) {
        const none = document.createElement('span');
        none.className = 'theme-meta';
        none.textContent = 'None detected';
        container.appendChild(none);
        return;
      }

      badges.forEach((badge) => {
        container.appendChild(pill(`${badge.label} (${badge.share.toFixed(0)}%)`));
      });
    }

    function renderModelCards(cards) {
      const grid = document.getElementById('model-analysis-grid');
      grid.innerHTML = '';

      cards.forEach((card) => {
        const div = document.createElement('div');
        div.className = 'model-card';

        const h4 = document.createElement('h4');
        h4.textContent = card.model + ' ';
        const count = document.createElement('span');
        count.className = 'count';
        count.dataset.rgb = card.rgb;
        count.dataset.textColor = card.text_color;
        count.textContent = `${card.total} submissions`;
        h4.appendChild(count);
        div.appendChild(h4);

        const strengthsRow = document.createElement('div');
        appendBadges(strengthsRow, card.strengths, 'strength');
        strengthsRow.querySelectorAll('.pill').forEach((el) => { el.dataset.rgb = card.rgb; });

        const weaknessesRow = document.createElement('div');
        appendBadges(weaknessesRow, card.weaknesses, 'weakness');
        weaknessesRow.querySelectorAll('.pill').forEach((el) => { el.dataset.rgb = card.rgb; });

        div.appendChild(strengthsRow);
        div.appendChild(weaknessesRow);
        grid.appendChild(div);
      });
    }

    function renderDataUnavailable() {
      document.getElementById('hw-breakdown-body').innerHTML =
        '<tr><td colspan="3">Submission data unavailable.</td></tr>';
      document.getElementById('provider-breakdown-body').innerHTML =
        '<tr><td colspan="4">Submission data unavailable.</td></tr>';
      document.getElementById('common-strengths').innerHTML =
        '<li>Submission data unavailable.</li>';
      document.getElementById('common-weaknesses').innerHTML =
        '<li>Submission data unavailable.</li>';
      document.getElementById('model-analysis-grid').innerHTML =
        '<div class="model-card"><p class="theme-meta">Submission data unavailable.</p></div>';
    }

    function renderUnexpectedError() {
      document.getElementById('hw-breakdown-body').innerHTML =
        '<tr><td colspan="3">Unable to render insights.</td></tr>';
      document.getElementById('provider-breakdown-body').innerHTML =
        '<tr><td colspan="4">Unable to render insights.</td></tr>';
      document.getElementById('model-analysis-grid').innerHTML =
        '<div class="model-card"><p class="theme-meta">Unable to render insights.</p></div>';
    }

    function renderInsights() {
      if (!insightsData) return;
      if (!insightsData.available) {
        renderDataUnavailable();
        return;
      }
      renderHomework(insightsData.homework);
      renderProviders(insightsData.providers);
      renderThemeList('common-strengths', insightsData.strengths, insightsData.total_models);
      renderThemeList('common-weaknesses', insightsData.weaknesses, insightsData.total_models);
      renderModelCards(insightsData.model_cards);
      applyPillColors();
    }

    async function loadInsights() {
      const [summaryRes, insightsRes] = await Promise.all([
        fetch('/api/summary'),
        fetch('/api/insights'),
      ]);
      if (!summaryRes.ok || !insightsRes.ok) {
        throw new Error('insights request failed');
      }
      renderSummary(await summaryRes.json());
      insightsData = await insightsRes.json();
      renderInsights();
    }

    async function init() {
      try {
        applyThemeState(await themeApi('/api/theme', 'GET'));
      } catch (err) {
        console.error('Theme init failed:', err);
        syncToggleUi();
      }

      try {
        await loadInsights();
      } catch (err) {
        console.error('Insights init failed:', err);
        renderUnexpectedError();
      }
    }

    document.querySelectorAll('[data-theme-toggle]').forEach((btn) => {
      btn.addEventListener('click', async (event) => {
        const endpoint = event.shiftKey ? '/api/theme/reset' : '/api/theme/toggle';
        try {
          applyThemeState(await themeApi(endpoint, 'POST'));
        } catch (err) {
          console.error('Theme update failed:', err);
        }
      });
    });

    media.addEventListener('change', async () => {
      try {
        applyThemeState(await themeApi('/api/theme', 'GET'));
      } catch (err) {
        console.error('Theme sync failed:', err);
      }
    });

    document.addEventListener('themechange', applyPillColors);

    init();
  </script>
</body>
</html>
"##;
