//! Server-embedded HTML pages.

pub const HOME_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head><title>Sleep Tracker API</title></head>
<body>
    <h1>Sleep Tracker API</h1>
    <p>Sleep Tracker demo application.</p>
    <p>The following routes show the system:</p>
    <ul>
        <li><a href="/sleep">/sleep</a> &ndash; View a sample JSON of generated sleep data</li>
        <li><a href="/sleep/series">/sleep/series</a> &ndash; View a JSON series of consecutive nights</li>
        <li><a href="/dashboard">/dashboard</a> &ndash; View a chart visualization of sleep data</li>
        <li><a href="/fhir/observation">/fhir/observation</a> &ndash; View FHIR Bundle JSON for the sample patient</li>
        <li>Refresh a page to see different data</li>
    </ul>
    <p>This app demonstrates how synthetic sleep data can be represented and shared in FHIR format.</p>
</body>
</html>
"#;

pub const DASHBOARD_PAGE: &str = r##"<!DOCTYPE html>
<html>
<head>
    <title>Sleep Dashboard</title>
    <style>
        body { font-family: sans-serif; margin: 2em; }
        #summary { margin-bottom: 1em; }
        canvas { border: 1px solid #ccc; }
    </style>
</head>
<body>
    <h1>Sleep Dashboard</h1>
    <p id="summary">Loading last night&hellip;</p>
    <canvas id="chart" width="960" height="120"></canvas>
    <p>Each bar is one sampling interval: filled while asleep, empty while awake. Refresh for a new night.</p>
    <script>
        fetch("/sleep")
            .then(function (res) { return res.json(); })
            .then(function (night) {
                document.getElementById("summary").textContent =
                    night.date + ": " + night.total_sleep_hours + "h asleep, quality " +
                    night.sleep_quality + " (chance " + night.chance_asleep + ")";

                var canvas = document.getElementById("chart");
                var ctx = canvas.getContext("2d");
                var samples = night.sleep_data;
                var barWidth = canvas.width / samples.length;
                ctx.fillStyle = "#4a6fa5";
                for (var i = 0; i < samples.length; i++) {
                    if (samples[i] === 1) {
                        ctx.fillRect(i * barWidth, 0, Math.ceil(barWidth), canvas.height);
                    }
                }
            })
            .catch(function (err) {
                document.getElementById("summary").textContent = "Failed to load sleep data: " + err;
            });
    </script>
</body>
</html>
"##;
