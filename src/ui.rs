use crate::client::THEME_MODE_KEY;

pub fn render_index() -> String {
    INDEX_HTML.replace("{{THEME_KEY}}", THEME_MODE_KEY)
}

const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Journal</title>
  <style>
    :root {
      --bg: #f6f4ef;
      --ink: #1f2328;
      --muted: #6b6f76;
      --card: #ffffff;
      --accent: #3b82f6;
      --danger: #ef4444;
      --shadow: 0 8px 24px rgba(31, 35, 40, 0.14);
    }

    :root.dark {
      --bg: #171717;
      --ink: #f5f5f5;
      --muted: #a3a3a3;
      --card: #262626;
      --shadow: none;
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: var(--bg);
      color: var(--ink);
      font-family: "Segoe UI", "Helvetica Neue", sans-serif;
    }

    nav {
      display: flex;
      justify-content: center;
      align-items: center;
      gap: 16px;
      padding: 12px;
    }

    nav a,
    button {
      border: 0;
      border-radius: 6px;
      padding: 12px 16px;
      font: inherit;
      font-weight: 600;
      color: #fff;
      background: var(--accent);
      text-decoration: none;
      cursor: pointer;
    }

    button.danger {
      background: var(--danger);
    }

    button.ghost {
      background: transparent;
      color: var(--ink);
    }

    .grid {
      display: grid;
      grid-template-columns: repeat(auto-fill, minmax(220px, 1fr));
      gap: 16px;
      padding: 16px;
    }

    .card {
      background: var(--card);
      box-shadow: var(--shadow);
      border-radius: 8px;
      padding: 16px;
      display: flex;
      flex-direction: column;
      justify-content: space-between;
      gap: 12px;
    }

    .card header {
      display: flex;
      justify-content: space-between;
      gap: 8px;
    }

    .card h2 {
      margin: 0;
      font-size: 1.1rem;
    }

    .card p {
      text-align: center;
      font-weight: 300;
    }

    .card footer {
      display: flex;
      justify-content: space-between;
      align-items: center;
      color: var(--muted);
      font-size: 0.9rem;
    }

    form {
      width: fit-content;
      margin: 40px auto;
      display: flex;
      flex-direction: column;
      gap: 16px;
      padding: 32px;
    }

    input,
    textarea {
      font: inherit;
      padding: 8px;
      border-radius: 6px;
      border: 1px solid var(--muted);
      background: var(--bg);
      color: var(--ink);
    }

    .empty {
      text-align: center;
    }

    .status {
      min-height: 1.5em;
      text-align: center;
      color: var(--danger);
    }
  </style>
</head>
<body>
  <nav>
    <a href="#/">All Entries</a>
    <a href="#/create">New Entry</a>
    <button class="ghost" id="mode-toggle" type="button"></button>
  </nav>
  <div class="status" id="status" role="status"></div>
  <main id="view"></main>

  <script>
    const THEME_KEY = '{{THEME_KEY}}';
    const DAY_MS = 24 * 60 * 60 * 1000;

    const view = document.getElementById('view');
    const statusEl = document.getElementById('status');
    const modeToggle = document.getElementById('mode-toggle');

    let entries = [];
    let mode = localStorage.getItem(THEME_KEY) === 'dark' ? 'dark' : 'light';

    const setStatus = (message) => {
      statusEl.textContent = message || '';
    };

    const applyMode = () => {
      document.documentElement.classList.toggle('dark', mode === 'dark');
      modeToggle.textContent = mode === 'dark' ? 'Dark Mode' : 'Light Mode';
      try {
        localStorage.setItem(THEME_KEY, mode);
      } catch (err) {
        console.error(err);
      }
    };

    const request = async (method, path, body) => {
      const res = await fetch(path, {
        method,
        headers: body ? { 'content-type': 'application/json' } : {},
        body: body ? JSON.stringify(body) : undefined
      });
      const payload = await res.json().catch(() => ({}));
      if (!res.ok) {
        throw new Error(payload.msg || 'Request failed');
      }
      return payload;
    };

    const hydrate = async () => {
      entries = await request('GET', '/get/');
    };

    const saveEntry = async (entry) => {
      const created = await request('POST', '/create/', entry);
      entries = [...entries, created];
    };

    const updateEntry = async (id, entry) => {
      await request('PUT', `/update/${encodeURIComponent(id)}`, entry);
      entries = entries.map((current) => (current.id === id ? entry : current));
    };

    const deleteEntry = async (id) => {
      await request('DELETE', `/delete/${encodeURIComponent(id)}`);
      entries = entries.filter((current) => current.id !== id);
    };

    const newId = () =>
      window.crypto && window.crypto.randomUUID
        ? window.crypto.randomUUID()
        : `${Date.now()}-${Math.random().toString(16).slice(2)}`;

    const dateInputValue = (iso) => new Date(iso).toISOString().split('T')[0];
    const toIso = (value) => new Date(value).toISOString();

    const el = (tag, props = {}, children = []) => {
      const node = document.createElement(tag);
      Object.assign(node, props);
      children.forEach((child) => node.append(child));
      return node;
    };

    const renderList = () => {
      if (entries.length === 0) {
        view.replaceChildren(
          el('section', { className: 'empty' }, [
            el('h1', { textContent: "You don't have any entries" }),
            el('p', {}, ["Let's ", el('a', { href: '#/create', textContent: 'create one' })])
          ])
        );
        return;
      }

      const cards = entries.map((entry) => {
        const remove = el('button', { className: 'danger', type: 'button', textContent: 'Delete' });
        remove.addEventListener('click', () => {
          deleteEntry(entry.id)
            .then(() => setStatus(''))
            .catch((err) => setStatus(err.message))
            .finally(render);
        });
        const edit = el('button', { type: 'button', textContent: 'Edit' });
        edit.addEventListener('click', () => {
          location.hash = `#/edit/${encodeURIComponent(entry.id)}`;
        });

        return el('article', { className: 'card', id: entry.id }, [
          el('header', {}, [
            el('h2', { textContent: entry.title }),
            el('time', { textContent: new Date(entry.scheduled).toLocaleDateString() })
          ]),
          el('p', { textContent: entry.description }),
          el('footer', {}, [
            el('div', {}, [remove, ' ', edit]),
            el('time', { textContent: `Created ${new Date(entry.created_at).toLocaleDateString()}` })
          ])
        ]);
      });

      view.replaceChildren(el('section', { className: 'grid' }, cards));
    };

    const renderForm = (initial, submitLabel, onSubmit) => {
      const title = el('input', { type: 'text', name: 'title', placeholder: 'Title', value: initial.title });
      const description = el('textarea', { name: 'description', placeholder: 'Description', value: initial.description });
      const createdAt = el('input', { type: 'date', name: 'created_at', value: dateInputValue(initial.created_at) });
      const scheduled = el('input', { type: 'date', name: 'scheduled', value: dateInputValue(initial.scheduled) });
      const submit = el('button', { type: 'submit', textContent: submitLabel });

      const form = el('form', { className: 'card' }, [title, description, createdAt, scheduled, submit]);
      form.addEventListener('submit', (event) => {
        event.preventDefault();
        const entry = {
          id: initial.id,
          title: title.value,
          description: description.value,
          created_at: toIso(createdAt.value),
          scheduled: toIso(scheduled.value)
        };
        onSubmit(entry)
          .then(() => setStatus(''))
          .catch((err) => setStatus(err.message));
      });
      view.replaceChildren(form);
    };

    const blankEntry = () => {
      const now = new Date();
      return {
        id: newId(),
        title: '',
        description: '',
        created_at: now.toISOString(),
        scheduled: new Date(now.getTime() + DAY_MS).toISOString()
      };
    };

    const render = () => {
      const hash = location.hash || '#/';
      if (hash === '#/create') {
        renderForm(blankEntry(), 'Create', async (entry) => {
          await saveEntry(entry);
          render();
        });
        return;
      }

      if (hash.startsWith('#/edit/')) {
        const id = decodeURIComponent(hash.slice('#/edit/'.length));
        const existing = entries.find((entry) => entry.id === id);
        if (!existing) {
          setStatus(`Error finding entry with id ${id}`);
          renderList();
          return;
        }
        renderForm(existing, 'Update', (entry) => updateEntry(id, entry));
        return;
      }

      renderList();
    };

    modeToggle.addEventListener('click', () => {
      mode = mode === 'light' ? 'dark' : 'light';
      applyMode();
    });
    window.addEventListener('hashchange', render);

    applyMode();
    render();
    hydrate()
      .catch((err) => setStatus(err.message))
      .finally(render);
  </script>
</body>
</html>
"##;
