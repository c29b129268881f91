use super::RawRecord;

pub(super) const RECORDS: &[RawRecord] = &[
	RawRecord {
		id: 1,
		name: "Algoritmo 1",
		summary: "Estrategia de divide y vencerás para ordenar y buscar en grandes conjuntos de datos.",
		description: &[
			"Este es el algoritmo número 1, diseñado para resolver problemas específicos en el ámbito de la computación.",
			"",
			"El algoritmo utiliza una estrategia de divide y vencerás, donde el problema principal se subdivide en problemas más pequeños y manejables. Cada subproblema se resuelve de forma independiente y luego se combinan las soluciones parciales para obtener la solución final.",
			"",
			"Características principales:",
			"- Complejidad temporal: O(n log n)",
			"- Complejidad espacial: O(n)",
			"- Estabilidad: Sí",
			"- Tipo: Recursivo",
			"",
			"Este algoritmo es particularmente útil cuando se trabaja con grandes conjuntos de datos que requieren ordenamiento o búsqueda eficiente. Su implementación recursiva permite una comprensión intuitiva del proceso, aunque en algunos casos puede requerir optimización para evitar desbordamientos de pila.",
		],
		syntax: None,
		examples: &[],
		nodes: &[
			("1", "Inicio", 250.0, 0.0),
			("2", "Proceso A", 100.0, 100.0),
			("3", "Proceso B", 400.0, 100.0),
			("4", "Decisión", 250.0, 200.0),
			("5", "Resultado 1", 100.0, 300.0),
			("6", "Resultado 2", 400.0, 300.0),
			("7", "Fin", 250.0, 400.0),
		],
		edges: &[
			("e1-2", "1", "2", None, true),
			("e1-3", "1", "3", None, true),
			("e2-4", "2", "4", Some("Camino A"), false),
			("e3-4", "3", "4", Some("Camino B"), false),
			("e4-5", "4", "5", Some("Si"), false),
			("e4-6", "4", "6", Some("No"), false),
			("e5-7", "5", "7", None, false),
			("e6-7", "6", "7", None, false),
		],
	},
	RawRecord {
		id: 2,
		name: "Algoritmo 2",
		summary: "Procesamiento de datos en tiempo real con caché, prefetching y cola de prioridades.",
		description: &[
			"El Algoritmo 2 es una solución optimizada para procesamiento rápido de datos en tiempo real.",
			"",
			"Utiliza técnicas avanzadas de caché y prefetching para minimizar la latencia en operaciones críticas. Su diseño modular permite escalabilidad horizontal, haciéndolo ideal para sistemas distribuidos.",
			"",
			"Características principales:",
			"- Complejidad temporal: O(1) amortizado",
			"- Complejidad espacial: O(log n)",
			"- Paralelizable: Sí",
			"- Tolerante a fallos: Sí",
			"",
			"El algoritmo implementa un sistema de cola con prioridades que garantiza que las operaciones más críticas se procesen primero, manteniendo al mismo tiempo un rendimiento óptimo para el resto de operaciones.",
		],
		syntax: None,
		examples: &[],
		nodes: &[
			("1", "Entrada", 250.0, 0.0),
			("2", "Caché", 250.0, 100.0),
			("3", "Validar", 250.0, 200.0),
			("4", "Procesar", 250.0, 300.0),
			("5", "Salida", 250.0, 400.0),
		],
		edges: &[
			("e1-2", "1", "2", None, true),
			("e2-3", "2", "3", None, false),
			("e3-4", "3", "4", None, false),
			("e4-5", "4", "5", None, true),
		],
	},
	RawRecord {
		id: 3,
		name: "Algoritmo 3",
		summary: "Optimización heurística que aprende de patrones históricos con validación cruzada.",
		description: &[
			"Algoritmo 3 ofrece la mejor precisión y rendimiento en su categoría.",
			"",
			"Basado en técnicas de machine learning y optimización heurística, este algoritmo aprende de patrones históricos para mejorar continuamente su precisión. Incorpora mecanismos de validación cruzada y ajuste automático de hiperparámetros.",
			"",
			"Características principales:",
			"- Precisión: 99.8%",
			"- Tiempo de entrenamiento: O(n²)",
			"- Tiempo de inferencia: O(log n)",
			"- Adaptativo: Sí",
			"",
			"Ideal para aplicaciones donde la precisión es crítica y se dispone de datos históricos suficientes para el entrenamiento del modelo.",
		],
		syntax: None,
		examples: &[],
		nodes: &[
			("1", "Dataset", 250.0, 0.0),
			("2", "Preprocesar", 150.0, 100.0),
			("3", "Entrenar", 350.0, 100.0),
			("4", "Validar", 250.0, 200.0),
			("5", "Optimizar", 150.0, 300.0),
			("6", "Modelo", 350.0, 300.0),
		],
		edges: &[
			("e1-2", "1", "2", None, false),
			("e1-3", "1", "3", None, false),
			("e2-4", "2", "4", None, true),
			("e3-4", "3", "4", None, true),
			("e4-5", "4", "5", Some("Ajustar"), false),
			("e5-6", "5", "6", None, false),
		],
	},
	RawRecord {
		id: 4,
		name: "Algoritmo 4",
		summary: "Búsqueda configurable con backtracking y programación dinámica.",
		description: &[
			"El Algoritmo 4 es una solución versátil y eficiente para múltiples escenarios.",
			"",
			"Su diseño flexible permite adaptarse a diferentes tipos de problemas mediante configuración de parámetros. Implementa estrategias de backtracking y programación dinámica para optimizar la búsqueda de soluciones.",
			"",
			"Características principales:",
			"- Versatilidad: Alta",
			"- Configurabilidad: Completa",
			"- Complejidad: O(n * m)",
			"- Memoria: Optimizada",
			"",
			"Perfecto para sistemas que requieren flexibilidad sin sacrificar rendimiento.",
		],
		syntax: None,
		examples: &[],
		nodes: &[
			("1", "Config", 250.0, 0.0),
			("2", "Inicializar", 250.0, 100.0),
			("3", "Iterar", 250.0, 200.0),
			("4", "Evaluar", 100.0, 300.0),
			("5", "Backtrack", 400.0, 300.0),
			("6", "Solución", 250.0, 400.0),
		],
		edges: &[
			("e1-2", "1", "2", None, false),
			("e2-3", "2", "3", None, true),
			("e3-4", "3", "4", None, false),
			("e4-5", "4", "5", Some("No óptimo"), false),
			("e5-3", "5", "3", None, true),
			("e4-6", "4", "6", Some("Óptimo"), false),
		],
	},
	RawRecord {
		id: 5,
		name: "Algoritmo 5",
		summary: "Optimización multiobjetivo con técnicas cuánticas simuladas y redes neuronales.",
		description: &[
			"Algoritmo 5 representa tecnología de última generación en computación moderna.",
			"",
			"Incorpora los últimos avances en teoría de algoritmos, incluyendo técnicas cuánticas simuladas y optimización multiobjetivo. Su arquitectura modular permite extensiones y personalizaciones avanzadas.",
			"",
			"Características principales:",
			"- Tecnología: Cutting-edge",
			"- Escalabilidad: Infinita",
			"- Eficiencia energética: Alta",
			"- Innovación: Máxima",
			"",
			"Diseñado para aplicaciones del futuro donde los límites tradicionales no aplican.",
		],
		syntax: None,
		examples: &[],
		nodes: &[
			("1", "Input", 250.0, 0.0),
			("2", "Quantum Layer", 150.0, 100.0),
			("3", "Neural Net", 350.0, 100.0),
			("4", "Fusion", 250.0, 200.0),
			("5", "Optimize", 250.0, 300.0),
			("6", "Output", 250.0, 400.0),
		],
		edges: &[
			("e1-2", "1", "2", None, true),
			("e1-3", "1", "3", None, true),
			("e2-4", "2", "4", None, false),
			("e3-4", "3", "4", None, false),
			("e4-5", "4", "5", None, false),
			("e5-6", "5", "6", None, true),
		],
	},
	RawRecord {
		id: 6,
		name: "Algoritmo 6",
		summary: "Sharding y balanceo de carga para escalar horizontalmente con consistencia eventual.",
		description: &[
			"El Algoritmo 6 está diseñado específicamente para escalabilidad máxima.",
			"",
			"Implementa técnicas de sharding y distribución automática de carga, permitiendo escalar horizontalmente sin límites prácticos. Su sistema de coordinación distribuida garantiza consistencia eventual mientras mantiene alta disponibilidad.",
			"",
			"Características principales:",
			"- Escalabilidad: Horizontal ilimitada",
			"- Disponibilidad: 99.99%",
			"- Consistencia: Eventual",
			"- Latencia: < 10ms p95",
			"",
			"Perfecto para sistemas que necesitan manejar millones de operaciones por segundo.",
		],
		syntax: None,
		examples: &[],
		nodes: &[
			("1", "Load Balancer", 250.0, 0.0),
			("2", "Shard 1", 50.0, 100.0),
			("3", "Shard 2", 250.0, 100.0),
			("4", "Shard 3", 450.0, 100.0),
			("5", "Coordinator", 250.0, 200.0),
			("6", "Response", 250.0, 300.0),
		],
		edges: &[
			("e1-2", "1", "2", None, true),
			("e1-3", "1", "3", None, true),
			("e1-4", "1", "4", None, true),
			("e2-5", "2", "5", None, false),
			("e3-5", "3", "5", None, false),
			("e4-5", "4", "5", None, false),
			("e5-6", "5", "6", None, false),
		],
	},
];
