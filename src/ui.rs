pub fn render_index(date: &str) -> String {
    INDEX_HTML.replace("{{DATE}}", date)
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Habit Grids</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #f8f3e6;
      --bg-2: #f5d3a7;
      --ink: #2b2a28;
      --accent: #ff6b4a;
      --accent-2: #2f4858;
      --card: rgba(255, 255, 255, 0.86);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.18);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #ffe9d4 60%, #f9f2e9 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: start center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(920px, 100%);
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
      flex-direction: column;
      gap: 6px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(2rem, 4vw, 2.8rem);
      margin: 0;
    }

    .subtitle {
      margin: 0;
      color: #5f5c57;
      font-size: 1rem;
    }

    .create {
      background: white;
      border-radius: 20px;
      padding: 20px;
      border: 1px solid rgba(47, 72, 88, 0.08);
      display: grid;
      gap: 14px;
    }

    .create h2 {
      margin: 0;
      font-size: 1.3rem;
    }

    .create .row {
      display: flex;
      flex-wrap: wrap;
      gap: 12px;
      align-items: center;
    }

    input[type="text"],
    input[type="number"],
    select {
      font: inherit;
      padding: 10px 14px;
      border-radius: 12px;
      border: 1px solid rgba(47, 72, 88, 0.2);
      background: #fffdf8;
      color: var(--ink);
    }

    input[type="text"] {
      flex: 1;
      min-width: 200px;
    }

    .weekday-picker {
      display: flex;
      gap: 8px;
      flex-wrap: wrap;
    }

    .weekday-picker label {
      display: inline-flex;
      align-items: center;
      gap: 4px;
      font-size: 0.9rem;
      color: #6b645d;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 12px 18px;
      font-size: 0.95rem;
      font-weight: 600;
      cursor: pointer;
      transition: transform 150ms ease, box-shadow 150ms ease;
      display: inline-flex;
      align-items: center;
      justify-content: center;
      gap: 8px;
    }

    button:active {
      transform: scale(0.98);
    }

    .btn-primary {
      background: var(--accent);
      color: white;
      box-shadow: 0 10px 24px rgba(255, 107, 74, 0.3);
    }

    .btn-mark {
      background: var(--accent-2);
      color: white;
      box-shadow: 0 10px 24px rgba(47, 72, 88, 0.3);
    }

    .btn-delete {
      background: transparent;
      color: #c63b2b;
      border: 1px solid rgba(198, 59, 43, 0.4);
      box-shadow: none;
      padding: 8px 14px;
      font-size: 0.85rem;
    }

    .grids {
      display: grid;
      gap: 18px;
    }

    .grid-card {
      background: white;
      border-radius: 20px;
      padding: 20px;
      border: 1px solid rgba(47, 72, 88, 0.08);
      display: grid;
      gap: 14px;
    }

    .grid-card .head {
      display: flex;
      flex-wrap: wrap;
      align-items: baseline;
      justify-content: space-between;
      gap: 10px;
    }

    .grid-card h3 {
      margin: 0;
      font-family: "Fraunces", "Georgia", serif;
      font-size: 1.35rem;
    }

    .mode-chip {
      font-size: 0.8rem;
      text-transform: uppercase;
      letter-spacing: 0.1em;
      color: var(--accent-2);
      background: rgba(47, 72, 88, 0.08);
      border-radius: 999px;
      padding: 4px 12px;
    }

    .stats-row {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(140px, 1fr));
      gap: 12px;
    }

    .stat {
      background: #fdf9f1;
      border-radius: 14px;
      padding: 12px 14px;
      display: grid;
      gap: 4px;
    }

    .stat .label {
      font-size: 0.8rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #8b857d;
    }

    .stat .value {
      font-size: 1.5rem;
      font-weight: 600;
      color: var(--accent-2);
    }

    .stat .value.current {
      color: var(--accent);
    }

    .days {
      display: flex;
      gap: 6px;
      flex-wrap: wrap;
    }

    .day {
      width: 38px;
      padding: 6px 0;
      border-radius: 10px;
      border: 1px solid rgba(47, 72, 88, 0.15);
      background: #fffdf8;
      color: #8b857d;
      font-size: 0.75rem;
      text-align: center;
      cursor: pointer;
      box-shadow: none;
    }

    .day.done {
      background: var(--accent);
      border-color: var(--accent);
      color: white;
    }

    .day.today {
      outline: 2px solid var(--accent-2);
      outline-offset: 1px;
    }

    .card-actions {
      display: flex;
      gap: 10px;
      flex-wrap: wrap;
    }

    .empty {
      text-align: center;
      color: #6b645d;
      padding: 24px 0;
    }

    .status {
      font-size: 0.95rem;
      color: #6b645d;
      min-height: 1.2em;
    }

    .status[data-type="error"] {
      color: #c63b2b;
    }

    .status[data-type="ok"] {
      color: #2d7a4b;
    }

    .hint {
      margin: 0;
      color: #6f6a65;
      font-size: 0.9rem;
    }

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

    @media (max-width: 600px) {
      .app {
        padding: 28px 22px;
      }
      .create .row {
        flex-direction: column;
        align-items: stretch;
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Habit Grids</h1>
      <p class="subtitle">Today is {{DATE}}. Mark days, keep streaks alive.</p>
    </header>

    <section class="create">
      <h2>New grid</h2>
      <form id="create-form">
        <div class="row">
          <input type="text" id="title" placeholder="e.g. Morning run" maxlength="100" required />
          <select id="mode">
            <option value="EVERY_DAY">Every day</option>
            <option value="TIMES_PER_WEEK">N times a week</option>
            <option value="MONTHLY">Monthly</option>
            <option value="EVERY_WEEKDAY">Weekdays only</option>
            <option value="WEEKENDS_ONLY">Weekends only</option>
            <option value="CUSTOM_DAYS">Custom days</option>
            <option value="EVERY_OTHER_DAY">Every other day</option>
          </select>
          <input type="number" id="weekly-goal" min="1" max="7" value="3" hidden />
          <button class="btn-primary" type="submit">Create</button>
        </div>
        <div class="weekday-picker" id="weekday-picker" hidden></div>
      </form>
    </section>

    <section class="grids" id="grids"></section>

    <div class="status" id="status"></div>
    <p class="hint">Streaks are recomputed from the full history on every load; nothing to get out of sync.</p>
  </main>

  <script>
    const gridsEl = document.getElementById('grids');
    const statusEl = document.getElementById('status');
    const form = document.getElementById('create-form');
    const titleEl = document.getElementById('title');
    const modeEl = document.getElementById('mode');
    const goalEl = document.getElementById('weekly-goal');
    const pickerEl = document.getElementById('weekday-picker');

    const TODAY = '{{DATE}}';
    const DAY_NAMES = ['Sun', 'Mon', 'Tue', 'Wed', 'Thu', 'Fri', 'Sat'];
    const MODE_LABELS = {
      EVERY_DAY: 'Every day',
      TIMES_PER_WEEK: 'Times / week',
      MONTHLY: 'Monthly',
      EVERY_WEEKDAY: 'Weekdays',
      WEEKENDS_ONLY: 'Weekends',
      CUSTOM_DAYS: 'Custom days',
      EVERY_OTHER_DAY: 'Every other day'
    };

    DAY_NAMES.forEach((name, index) => {
      const label = document.createElement('label');
      const box = document.createElement('input');
      box.type = 'checkbox';
      box.value = index;
      label.appendChild(box);
      label.appendChild(document.createTextNode(name));
      pickerEl.appendChild(label);
    });

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const isoOffset = (offset) => {
      const d = new Date(TODAY + 'T00:00:00');
      d.setDate(d.getDate() - offset);
      const y = d.getFullYear();
      const m = String(d.getMonth() + 1).padStart(2, '0');
      const dd = String(d.getDate()).padStart(2, '0');
      return y + '-' + m + '-' + dd;
    };

    const api = async (path, options) => {
      const res = await fetch(path, options);
      if (!res.ok) {
        const msg = await res.text();
        throw new Error(msg || 'Request failed');
      }
      return res.status === 204 ? null : res.json();
    };

    const dayStrip = (grid) => {
      const strip = document.createElement('div');
      strip.className = 'days';
      const done = new Set(grid.completed_dates);
      for (let offset = 13; offset >= 0; offset -= 1) {
        const iso = isoOffset(offset);
        const cell = document.createElement('button');
        cell.type = 'button';
        cell.className = 'day' + (done.has(iso) ? ' done' : '') + (iso === TODAY ? ' today' : '');
        cell.textContent = iso.slice(8);
        cell.title = iso;
        cell.addEventListener('click', () => {
          api('/api/grids/' + grid.id + '/toggle', {
            method: 'POST',
            headers: { 'content-type': 'application/json' },
            body: JSON.stringify({ date: iso })
          })
            .then(refresh)
            .catch((err) => setStatus(err.message, 'error'));
        });
        strip.appendChild(cell);
      }
      return strip;
    };

    const statBox = (label, value, extraClass) => {
      const box = document.createElement('div');
      box.className = 'stat';
      const labelEl = document.createElement('span');
      labelEl.className = 'label';
      labelEl.textContent = label;
      const valueEl = document.createElement('span');
      valueEl.className = 'value' + (extraClass ? ' ' + extraClass : '');
      valueEl.textContent = value;
      box.appendChild(labelEl);
      box.appendChild(valueEl);
      return box;
    };

    const renderCard = (grid) => {
      const card = document.createElement('article');
      card.className = 'grid-card';

      const head = document.createElement('div');
      head.className = 'head';
      const title = document.createElement('h3');
      title.textContent = grid.title;
      const chip = document.createElement('span');
      chip.className = 'mode-chip';
      let label = MODE_LABELS[grid.schedule.mode] || grid.schedule.mode;
      if (grid.schedule.mode === 'TIMES_PER_WEEK' && grid.schedule.weekly_goal) {
        label = grid.schedule.weekly_goal + 'x / week';
      }
      chip.textContent = label;
      head.appendChild(title);
      head.appendChild(chip);
      card.appendChild(head);

      const stats = document.createElement('div');
      stats.className = 'stats-row';
      stats.appendChild(statBox('Current streak', grid.stats.current_streak, 'current'));
      stats.appendChild(statBox('Best streak', grid.stats.best_streak));
      stats.appendChild(statBox('Total days', grid.stats.total_days));
      card.appendChild(stats);

      card.appendChild(dayStrip(grid));

      const actions = document.createElement('div');
      actions.className = 'card-actions';
      const mark = document.createElement('button');
      mark.className = 'btn-mark';
      mark.type = 'button';
      mark.textContent = 'Mark today';
      mark.addEventListener('click', () => {
        api('/api/grids/' + grid.id + '/mark-today', { method: 'POST' })
          .then(refresh)
          .then(() => setStatus('Saved', 'ok'))
          .catch((err) => setStatus(err.message, 'error'));
      });
      const remove = document.createElement('button');
      remove.className = 'btn-delete';
      remove.type = 'button';
      remove.textContent = 'Delete';
      remove.addEventListener('click', () => {
        if (!window.confirm('Delete "' + grid.title + '"?')) {
          return;
        }
        api('/api/grids/' + grid.id, { method: 'DELETE' })
          .then(refresh)
          .catch((err) => setStatus(err.message, 'error'));
      });
      actions.appendChild(mark);
      actions.appendChild(remove);
      card.appendChild(actions);

      return card;
    };

    const renderGrids = (grids) => {
      gridsEl.innerHTML = '';
      if (!grids.length) {
        const empty = document.createElement('p');
        empty.className = 'empty';
        empty.textContent = 'No grids yet. Create one above to start tracking.';
        gridsEl.appendChild(empty);
        return;
      }
      grids.forEach((grid) => gridsEl.appendChild(renderCard(grid)));
    };

    const refresh = async () => {
      renderGrids(await api('/api/grids'));
    };

    modeEl.addEventListener('change', () => {
      goalEl.hidden = modeEl.value !== 'TIMES_PER_WEEK';
      pickerEl.hidden = modeEl.value !== 'CUSTOM_DAYS';
    });

    form.addEventListener('submit', (event) => {
      event.preventDefault();
      const body = { title: titleEl.value, mode: modeEl.value };
      if (modeEl.value === 'TIMES_PER_WEEK') {
        body.weekly_goal = Number(goalEl.value);
      }
      if (modeEl.value === 'CUSTOM_DAYS') {
        body.custom_days = Array.from(pickerEl.querySelectorAll('input:checked')).map((box) =>
          Number(box.value)
        );
      }
      api('/api/grids', {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify(body)
      })
        .then(() => {
          form.reset();
          goalEl.hidden = true;
          pickerEl.hidden = true;
          setStatus('Grid created', 'ok');
          return refresh();
        })
        .catch((err) => setStatus(err.message, 'error'));
    });

    refresh().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;
