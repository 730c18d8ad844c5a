use vetting_core::model::{Phase, Question};

pub(crate) fn phases() -> Vec<Phase> {
    vec![
        Phase::new(
            "general",
            "A. General Competence & Tools",
            vec![
                Question::written("gen_1", "What is the difference between scheduling a meeting in Google Calendar vs. Outlook?"),
                Question::written("gen_2", "Which tool would you use to manage multiple email inboxes for one client? Why?"),
                Question::written("gen_3", "How do you prioritize incoming tasks when everything seems urgent?"),
                Question::written("gen_4", "What’s the difference between a task management tool like Asana and Trello?"),
                Question::written("gen_5", "How do you handle file sharing securely with a client?"),
                Question::written("gen_6", "Name three AI tools that can help you save time as a VA."),
                Question::written("gen_7", "How do you manage time zone differences when booking meetings for global clients?"),
                Question::written("gen_8", "What’s the best way to organize shared documents for quick access by a client?"),
                Question::written("gen_9", "How do you ensure you don’t miss deadlines? (Mention a tool or system)."),
                Question::written("gen_10", "If given access to a client’s social media, how do you maintain confidentiality?"),
            ],
        ),
        Phase::new(
            "communication",
            "B. Communication & Writing",
            vec![
                Question::written("comm_1", "Draft a polite email reminding a client’s partner about an overdue invoice."),
                Question::written("comm_2", "How would you respond if a client’s customer is upset in an email?"),
                Question::written("comm_3", "Correct this poorly written sentence: \"pls snd me d doc asap\" (make it professional)."),
                Question::written("comm_4", "What’s the difference between formal, semi-formal, and casual emails? Give examples."),
                Question::written("comm_5", "Write a sample Slack update to a client letting them know you’ve completed a task."),
                Question::written("comm_6", "How do you handle language barriers with international clients?"),
                Question::written("comm_7", "Rewrite this short message professionally: \"Sorry late. Will finish later.\""),
                Question::written("comm_8", "How do you politely decline a request that’s outside your scope of work?"),
                Question::written("comm_9", "What is the importance of tone in client communications?"),
                Question::written("comm_10", "How would you summarize a 2-page document into a 5-sentence executive summary?"),
            ],
        ),
        Phase::new(
            "organization",
            "C. Organization & Productivity",
            vec![
                Question::written("org_1", "How do you manage multiple clients without mixing up tasks?"),
                Question::written("org_2", "What’s your system for daily task tracking?"),
                Question::written("org_3", "If you’re working remotely, how do you set boundaries to stay productive?"),
                Question::written("org_4", "How do you handle repetitive tasks efficiently?"),
                Question::written("org_5", "What’s the difference between batch working and multitasking? Which is better and why?"),
                Question::written("org_6", "You’re assigned 5 tasks but only have time for 3. How do you decide what to do?"),
                Question::written("org_7", "Which productivity technique do you use? (Pomodoro, Eisenhower Matrix, etc.)"),
                Question::written("org_8", "How do you report progress to a client without overwhelming them?"),
                Question::written("org_9", "If two clients schedule meetings at the same time, what’s your process?"),
                Question::written("org_10", "How do you keep your personal and client files separate and secure?"),
            ],
        ),
        Phase::new(
            "criticalThinking",
            "D. Critical Thinking & Problem Solving",
            vec![
                Question::written("crit_1", "A client gives you vague instructions: “Handle my calendar.” What’s your first step?"),
                Question::written("crit_2", "A client forgets to show up for an important meeting you scheduled. What do you do?"),
                Question::written("crit_3", "You’re asked to book a hotel for a client in a city you’ve never been to. How do you decide?"),
                Question::written("crit_4", "A client asks for help with a task you’ve never done before. What’s your response?"),
                Question::written("crit_5", "How would you handle discovering an error in a client’s published document?"),
                Question::written("crit_6", "What’s your process if you lose internet while working on an urgent task?"),
                Question::written("crit_7", "A client gives conflicting instructions. How do you resolve it?"),
                Question::written("crit_8", "A client accidentally shares sensitive personal data. What should you do?"),
                Question::written("crit_9", "A client expects you to be available 24/7. How do you set boundaries?"),
                Question::written("crit_10", "You notice the client is paying you late repeatedly. How do you address it?"),
            ],
        ),
        Phase::new(
            "tech",
            "E. Tech & Specialized Knowledge",
            vec![
                Question::written("tech_1", "What’s the difference between cloud storage (Google Drive) and local storage?"),
                Question::written("tech_2", "Which CRM (Customer Relationship Management) tools have you used?"),
                Question::written("tech_3", "How do you create a professional invoice for a client?"),
                Question::written("tech_4", "Which tools would you recommend for automating recurring tasks?"),
                Question::written("tech_5", "What’s the safest way to store client passwords?"),
                Question::written("tech_6", "How do you manage bulk email outreach without being flagged as spam?"),
                Question::written("tech_7", "What steps would you take to prepare a Zoom meeting for a client?"),
                Question::written("tech_8", "What’s the role of Zapier in streamlining client workflows?"),
                Question::written("tech_9", "How do you create a travel itinerary for a client?"),
                Question::written("tech_10", "What’s the difference between shared access and delegated access in Gmail?"),
            ],
        ),
    ]
}
