use vetting_core::model::{Phase, Question};

pub(crate) fn phases() -> Vec<Phase> {
    vec![
        Phase::new(
            "html",
            "1. Core HTML (Structure & Semantics)",
            vec![
                Question::written("html_1", "What is the difference between <section>, <article>, <div>, and <span>?"),
                Question::written("html_2", "Why is semantic HTML important for accessibility and SEO?"),
                Question::written("html_3", "What are the roles of alt attributes in images, and what makes a good alt text?"),
                Question::written("html_4", "What’s the difference between <link> and <script> tags in terms of placement and purpose?"),
                Question::written("html_5", "How would you create a form that is both accessible and responsive?"),
                Question::written("html_6", "Explain the difference between block-level and inline elements with examples."),
                Question::written("html_7", "How do data-* attributes work, and when should you use them?"),
                Question::written("html_8", "What’s the difference between <button> and <input type=\"button\">?"),
                Question::written("html_9", "Why should you use <label> with form elements?"),
                Question::written("html_10", "Explain the difference between relative, absolute, and fixed paths for linking assets."),
            ],
        ),
        Phase::new(
            "css",
            "2. CSS (Styling, Layout & Architecture)",
            vec![
                Question::written("css_1", "What’s the difference between relative, absolute, fixed, and sticky positioning?"),
                Question::written("css_2", "Explain the difference between Flexbox and CSS Grid. When would you use one over the other?"),
                Question::written("css_3", "How do media queries work? Provide an example for making text responsive."),
                Question::written("css_4", "What is the difference between inline, inline-block, and block in CSS?"),
                Question::written("css_5", "How do CSS pseudo-classes (:hover, :nth-child) differ from pseudo-elements (::before, ::after)?"),
                Question::written("css_6", "What is the difference between em, rem, %, px, and vw/vh units?"),
                Question::written("css_7", "How would you implement a responsive navigation bar without JavaScript?"),
                Question::written("css_8", "What’s the difference between z-index and stacking context?"),
                Question::written("css_9", "What are CSS variables (--var) and why are they useful?"),
                Question::written("css_10", "What’s the difference between SCSS, LESS, and vanilla CSS?"),
            ],
        ),
        Phase::new(
            "javascript",
            "3. JavaScript (Core & DOM Manipulation)",
            vec![
                Question::written("js_1", "What’s the difference between == and === in JavaScript?"),
                Question::written("js_2", "Explain the concept of closures with a practical example."),
                Question::written("js_3", "What is event delegation, and why is it important in frontend development?"),
                Question::written("js_4", "What’s the difference between var, let, and const?"),
                Question::written("js_5", "How would you debounce a function in JavaScript?"),
                Question::written("js_6", "Explain how the event loop works in JavaScript."),
                Question::written("js_7", "What’s the difference between synchronous and asynchronous code?"),
                Question::written("js_8", "What are Promises, and how do they improve async handling?"),
                Question::written("js_9", "Explain how localStorage, sessionStorage, and cookies differ."),
                Question::written("js_10", "What’s the difference between for…in, for…of, and forEach?"),
            ],
        ),
        Phase::new(
            "frameworks",
            "4. Frameworks & Libraries (React, Vue, Angular, etc.)",
            vec![
                Question::written("frame_1", "Explain the concept of “virtual DOM” in React."),
                Question::written("frame_2", "What’s the difference between controlled and uncontrolled components in React?"),
                Question::written("frame_3", "How does two-way data binding differ between Angular and React?"),
                Question::written("frame_4", "What’s the difference between props and state in React?"),
                Question::written("frame_5", "Explain how React hooks (useState, useEffect) work."),
                Question::written("frame_6", "What is hydration in React and when does it matter?"),
                Question::written("frame_7", "How do Vue’s reactivity and watchers work?"),
                Question::written("frame_8", "What’s the difference between Single Page Applications (SPAs) and Multi Page Applications (MPAs)?"),
                Question::written("frame_9", "Why would you use a framework instead of plain JavaScript?"),
                Question::written("frame_10", "Explain what tree-shaking is in bundlers like Webpack or Vite."),
            ],
        ),
        Phase::new(
            "performance",
            "5. Performance, Accessibility & Testing",
            vec![
                Question::written("perf_1", "How would you optimize the performance of a webpage? (name 3 methods)"),
                Question::written("perf_2", "What’s lazy loading, and how is it implemented in images?"),
                Question::written("perf_3", "How do ARIA roles help in accessibility? Give examples."),
                Question::written("perf_4", "What are Core Web Vitals (LCP, FID, CLS)? Why do they matter?"),
                Question::written("perf_5", "How would you debug a slow-rendering React component?"),
                Question::written("perf_6", "How do you test frontend components for correctness and usability?"),
                Question::written("perf_7", "What’s the difference between unit testing, integration testing, and end-to-end testing in frontend?"),
                Question::written("perf_8", "How do you detect and fix a memory leak in a frontend app?"),
                Question::written("perf_9", "What is cross-browser compatibility, and how would you ensure it?"),
                Question::written("perf_10", "Explain progressive enhancement vs graceful degradation in frontend design."),
            ],
        ),
    ]
}
